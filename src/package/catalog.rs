//! Ordered catalog of package-family patterns.
//!
//! Every [`PackageFamily`] renders to one regular-expression fragment. The
//! fragments are joined, in catalog order, into a single alternation wrapped
//! in token-boundary assertions (see [`combined_pattern`]).
//!
//! # Precedence
//!
//! Matching is leftmost-first: the earliest position in the description wins,
//! and among alternatives that match at the same position the family declared
//! first wins. Narrow families (`TO-218AB-5`, `TO-92-3`, `TO-220AB`) are
//! therefore listed before the broad ones that would otherwise swallow them,
//! and a few late entries only exist to catch spellings that the alias table
//! folds onto another name (`SC-67`, `ISO-218`).
//!
//! Variant strings are regex fragments, not literals (`"206-?AA"`).

/// A family of related package names sharing a prefix and a set of valid
/// pin counts or suffix letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageFamily {
    /// Stable, human-readable label for the family.
    pub name: &'static str,

    /// Regex fragment preceding the variant group.
    pub prefix: &'static str,

    /// Alternatives accepted after the prefix, in precedence order.
    pub variants: &'static [&'static str],

    /// Whether the variant group may be absent.
    pub optional: bool,

    /// Regex fragment following the variant group.
    pub suffix: &'static str,
}

impl PackageFamily {
    /// Creates a family matched by `prefix` alone.
    #[must_use]
    pub const fn new(name: &'static str, prefix: &'static str) -> Self {
        Self {
            name,
            prefix,
            variants: &[],
            optional: false,
            suffix: "",
        }
    }

    /// Sets the alternatives accepted after the prefix.
    #[must_use]
    pub const fn with_variants(self, variants: &'static [&'static str]) -> Self {
        Self { variants, ..self }
    }

    /// Makes the variant group optional.
    #[must_use]
    pub const fn optional(self) -> Self {
        Self {
            optional: true,
            ..self
        }
    }

    /// Sets the fragment that follows the variant group.
    #[must_use]
    pub const fn with_suffix(self, suffix: &'static str) -> Self {
        Self { suffix, ..self }
    }

    /// Renders the family as a regex fragment.
    #[must_use]
    pub fn pattern(&self) -> String {
        if self.variants.is_empty() {
            return format!("{}{}", self.prefix, self.suffix);
        }

        format!(
            "{}(?:{}){}{}",
            self.prefix,
            self.variants.join("|"),
            if self.optional { "?" } else { "" },
            self.suffix
        )
    }
}

/// Characters (or string edges) allowed immediately before a package token.
pub const LEFT_BOUNDARY: &str = r"^|-|,|:|\s|$|\[|\(|/";

/// Characters (or string edges) allowed immediately after a package token.
pub const RIGHT_BOUNDARY: &str = r"\)|\]|;|,|=|\s|/|$";

/// Name of the capture group holding the whole package token.
pub const PACKAGE_GROUP: &str = "package";

/// Returns the capture group name used for the family at `index`.
#[must_use]
pub fn family_group(index: usize) -> String {
    format!("f{index}")
}

/// Builds the boundary-anchored alternation of every family in [`FAMILIES`].
///
/// Each family is wrapped in its own named group so the winning family can be
/// identified after a match.
#[must_use]
pub fn combined_pattern() -> String {
    let families = FAMILIES
        .iter()
        .enumerate()
        .map(|(index, family)| format!("(?P<{}>{})", family_group(index), family.pattern()))
        .collect::<Vec<_>>()
        .join("|");

    format!("(?:{LEFT_BOUNDARY})(?P<{PACKAGE_GROUP}>{families})(?:{RIGHT_BOUNDARY})")
}

/// Looks up a family by its label.
#[must_use]
pub fn family_by_name(name: &str) -> Option<(usize, &'static PackageFamily)> {
    FAMILIES
        .iter()
        .enumerate()
        .find(|(_, family)| family.name == name)
}

/// JEDEC TO outline numbers accepted after a bare `TO` prefix.
const TO_OUTLINES: &[&str] = &[
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16", "17",
    "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29", "30", "31", "32", "33",
    "34", "35", "36", "37", "38", "39", "40", "41", "42", "43", "44", "45", "46", "47", "48", "49",
    "50", "51", "52", "53", "54", "55", "56", "57", "58", "59", "60", "61", "62", "63", "64", "65",
    "66", "67", "68", "69", "70", "71", "72", "73", "74", "75", "76", "77", "78", "79", "80", "81",
    "82", "83", "84", "85", "86", "87", "88", "89", "90", "91", "93", "94", "95", "96", "97", "98",
    "99", "100", "101", "102", "103", "104", "105", "106", "107", "108", "109", "110", "111",
    "112", "113", "114", "115", "116", "117", "118", "119", "120", "121", "122", "123", "124",
    "125", "126", "127", "128", "129", "130", "131", "132", "201", "202", "203", "204", "205",
    "206", "206-?AA", "207", "208", "208A", "210", "211", "212", "213AA", "214", "217", "218",
    "221", "222", "223", "224", "225", "226", "227", "228", "229", "230", "231", "232", "233",
    "234", "235", "239", "241", "242", "248", "249", "254", "255", "257", "258", "259", "264",
    "268", "276",
];

/// NXP SOT outline numbers.
const SOT_OUTLINES: &[&str] = &[
    "23", "27", "32", "38", "54", "78", "82", "89", "096", "96", "097", "97", "100", "101", "102",
    "108", "109", "110", "111", "115", "116", "117", "120", "122", "129", "131", "136", "137",
    "141", "142", "143", "144", "146", "157", "158", "162", "163", "172", "176", "186", "187",
    "188", "189", "190", "193", "195", "199", "205", "222", "223", "226", "232", "234", "238",
    "240", "243", "247", "257", "258", "259", "261", "263", "266", "270", "274", "281", "287",
    "307", "310", "313", "314", "315", "316", "317", "318", "319", "320", "322", "323", "334",
    "337", "338", "339", "340", "341", "343", "346", "349", "352", "353", "354", "355", "357",
    "358", "360", "361", "362", "363", "364", "369", "370", "371", "375", "376", "379", "380",
    "385", "386", "387", "389", "390", "391", "393", "397", "398", "399", "400", "401", "402",
    "403", "404", "407", "409", "411", "414", "416", "418", "420", "425", "426", "427", "428",
    "429", "431", "435", "441", "442", "445", "449", "453", "455", "457", "459", "462", "464",
    "467", "470", "471", "472", "475", "477", "480", "481", "486", "487", "489", "490", "496",
    "500", "505", "506", "509", "510", "513", "517", "519", "521", "523", "524", "527", "528",
    "530", "531", "532", "533", "534", "536", "537", "542", "543", "545", "546", "549", "550",
    "552", "553", "555", "556", "559", "560", "564", "566", "567", "569", "570", "572", "573",
    "574", "576", "577", "578", "579", "581", "584", "587", "588", "589", "594", "595", "597",
    "598", "599", "600", "601", "602", "603", "604", "605", "607", "610", "611", "612", "616",
    "617", "618", "619", "622", "623", "624", "627", "629", "630", "631", "632", "633", "635",
    "636", "637", "638", "639", "640", "643", "644", "646", "647", "648", "649", "650", "651",
    "652", "655", "658", "662", "663", "665", "666", "668", "669", "680", "683", "684", "685",
    "686", "687", "697", "698", "700", "702", "706", "707", "710", "711", "713", "714", "715",
    "724", "725", "726", "727", "728", "730", "732", "734", "740", "741", "744", "745", "746",
    "747", "748", "750", "751", "753", "754", "756", "758", "759", "761", "762", "763", "764",
    "765", "766", "767", "770", "773", "774", "775", "776", "777", "778", "780", "782", "784",
    "785", "786", "788", "789", "791", "792", "793", "795", "796", "797", "799", "800", "802",
    "803", "804", "807", "809", "810", "811", "812", "813", "814", "815", "817", "818", "819",
    "820", "821", "823", "824", "825", "826", "827", "829", "830", "832", "833", "835", "836",
    "840", "841", "844", "845", "846", "847", "848", "849", "850", "851", "852", "853", "855",
    "856", "857", "858", "859", "860", "861", "862", "863", "864", "865", "866", "867", "868",
    "869", "870", "871", "873", "874", "875", "878", "879", "880", "881", "882", "883", "886",
    "889", "891", "893", "894", "895", "898", "899", "900", "901", "902", "903", "904", "905",
    "906", "907", "908", "909", "910", "911", "912", "913", "915", "916", "917", "918", "919",
    "920", "923", "925", "926", "927", "928", "929", "930", "931", "932", "933", "935", "938",
    "941", "942", "943", "945", "946", "947", "948", "949", "950", "951", "952", "953", "954",
    "955", "956", "958", "959", "960", "961", "962", "963", "965", "966", "968", "969", "972",
    "973", "974", "978", "983", "984", "985", "989", "991", "992", "993", "994", "995", "996",
    "998", "999", "1000", "1001", "1003", "1008", "1011", "1012", "1016", "1017", "1018", "1019",
    "1020", "1021", "1022", "1023", "1024", "1025", "1026", "1027", "1028", "1029", "1031", "1032",
    "1033", "1034", "1035", "1036", "1039", "1040", "1041", "1042", "1045", "1046", "1047", "1048",
    "1049", "1050", "1051", "1052", "1054", "1055", "1056", "1058", "1059", "1061", "1062", "1063",
    "1064", "1065", "1067", "1068", "1069", "1070", "1071", "1072", "1073", "1074", "1075", "1077",
    "1078", "1079", "1080", "1081", "1082", "1085", "1086", "1087", "1088", "1089", "1090", "1091",
    "1092", "1093", "1094", "1095", "1096", "1097", "1098", "1099", "1102", "1103", "1104", "1107",
    "1108", "1109", "1113", "1114", "1115", "1116", "1118", "1119", "1122", "1123", "1128", "1129",
    "1131", "1133", "1134", "1136", "1139", "1140", "1141", "1142", "1143", "1144", "1145", "1147",
    "1148", "1149", "1150", "1151", "1152", "1153", "1154", "1155", "1156", "1157", "1158", "1159",
    "1160", "1161", "1162", "1163", "1164", "1165", "1166", "1167", "1168", "1169", "1172", "1173",
    "1174", "1175", "1176", "1177", "1178", "1179", "1180", "1181", "1182", "1183", "1184", "1185",
    "1186", "1187", "1188", "1189", "1190", "1191", "1192", "1193", "1194", "1196", "1197", "1198",
    "1199", "1202", "1203", "1205", "1207", "1209", "1210", "1215", "1216", "1220", "1222", "1225",
    "1226", "1229", "1230", "1232", "1233", "1234", "1235", "1236", "1249", "1252", "1254", "1255",
    "1259", "1260", "1261", "1263", "1268", "1288", "1289", "1290", "1291", "1301", "1302", "1303",
    "1304", "1305", "1306", "1307", "1308", "1309", "1310", "1311", "1312", "1313", "1314", "1315",
    "1316", "1317", "1318", "1320", "1321", "1322", "1323", "1324", "1325", "1327", "1328", "1329",
    "1330", "1331", "1332", "1333", "1334", "1335", "1336", "1337", "1338", "1339", "1340", "1341",
    "1342", "1343", "1344", "1345", "1346", "1347", "1348", "1349", "1350", "1353", "1354", "1355",
    "1358", "1359", "1360", "1361", "1362", "1363", "1365", "1369", "1372", "1373", "1375", "1376",
    "1380", "1384", "1390", "1392", "1393", "1394", "1397", "1399", "1401", "1403", "1404", "1408",
    "1426", "1427", "1428", "1429", "1430", "1431", "1432", "1435", "1436", "1437", "1438", "1439",
    "1440", "1442", "1443", "1444", "1445", "1446", "1447", "1448", "1450", "1452", "1453", "1454",
    "1456", "1457", "1458", "1459", "1461", "1462", "1463", "1464", "1465", "1496", "1510", "1511",
    "1512", "1513", "1514", "1515", "1516", "1517", "1518", "1519", "1520", "1521", "1522", "1523",
    "1524", "1525", "1526", "1527", "1528", "1529", "1530", "1531", "1533", "1534", "1535", "1536",
    "1537", "1538", "1539", "1540", "1542", "1543", "1544", "1545", "1546", "1547", "1548", "1549",
    "1550", "1551", "1552", "1553", "1554", "1555", "1556", "1557", "1558", "1559", "1560", "1561",
    "1562", "1563", "1564", "1565", "1566", "1567", "1569", "1570", "1571", "1572", "1573", "1574",
    "1575", "1576", "1577", "1578", "1579", "1580", "1581", "1582", "1583", "1584", "1585", "1586",
    "1587", "1588", "1589", "1590", "1591", "1592", "1593", "1594", "1595", "1596", "1597", "1598",
    "1599", "1600", "1601", "1602", "1603", "1604", "1605", "1608", "1609", "1610", "1611", "1612",
    "1613", "1615", "1616", "1617", "1618", "1619", "1620", "1621", "1622", "1623", "1624", "1625",
    "1626", "1627", "1628", "1629", "1630", "1631", "1632", "1633", "1634", "1635", "1636", "1637",
    "1638", "1639", "1640", "1641", "1642", "1643", "1644", "1645", "1646", "1647", "1648", "1649",
    "1650", "1651", "1652", "1653", "1654", "1655", "1656", "1657", "1658", "1659", "1660", "1661",
    "1662", "1663", "1664", "1665", "1666", "1667", "1668", "1669", "1670", "1671", "1672", "1673",
    "1674", "1675", "1676", "1677", "1678", "1679", "1680", "1681", "1682", "1683", "1684", "1685",
    "1687", "1688", "1691", "1692", "1693", "1694", "1695", "1696", "1697", "1698", "1699", "1701",
    "1703", "1704", "1705", "1706", "1707", "1708", "1709", "1710", "1711", "1712", "1713", "1714",
    "1715", "1716", "1717", "1718", "1720", "1721", "1722", "1723", "1724", "1725", "1726", "1727",
    "1728", "1729", "1730", "1731", "1732", "1733", "1734", "1735", "1736", "1737", "1738", "1739",
    "1740", "1741", "1742", "1744", "1745", "1746", "1747", "1748", "1749", "1750", "1751", "1752",
    "1753", "1754", "1756", "1757", "1759", "1760", "1761", "1762", "1763", "1764", "1765", "1766",
    "1767", "1768", "1769", "1770", "1771", "1772", "1773", "1774", "1775", "1776", "1777", "1778",
    "1779", "1780", "1781", "1782", "1783", "1784", "1785", "1786", "1787", "1788", "1789", "1790",
    "1791", "1792", "1793", "1794", "1795", "1796", "1797", "1798", "1799", "1800", "1801", "1802",
    "1803", "1804", "1805", "1806", "1809", "1811", "1812", "1813", "1814", "1815", "1816", "1817",
    "1818", "1819", "1821", "1822", "1823", "1824", "1825", "1826", "1827", "1828", "1829", "1830",
    "1832", "1833", "1834", "1835", "1836", "1837", "1838", "1839", "1840", "1842", "1843", "1845",
    "1849", "1850", "1851", "1852", "1854", "1855", "1856", "1857", "1860", "1862", "1863", "1865",
    "1866", "1868", "1870", "1872", "1873", "1875", "1877", "1878", "1879", "1880", "1882", "1883",
    "1887", "1888", "1890", "1893", "1894", "1895", "1896", "1898", "1899", "1901", "1903", "1910",
    "1911", "1914", "1917", "1926", "1927", "1928", "1936", "1940", "1941", "1942", "1945", "1950",
];

/// JEDEC DO outlines, including the DO-2xx registrations with letter suffixes.
const DO_OUTLINES: &[&str] = &[
    "1", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16", "17", "18", "19",
    "20", "21", "22", "23", "24", "25", "26", "27", "28", "29", "30", "31", "32", "33", "34", "35",
    "36", "37", "38", "39", "40", "41", "41G", "42", "43", "44", "45", "200AA", "200AB", "201AA",
    "201AD", "201AE", "202AA", "203AA", "203AB", "204AA", "204AB", "204AC", "204AD", "204AE",
    "204AF", "204AG", "204AH", "204AL", "205AA", "205AB", "208AA", "209AA", "210AA", "211AA",
    "213AA", "213AB", "214AA", "214AB", "214AC", "214BA", "215", "215AA", "215AB", "215AC", "216",
    "216AA", "218AB", "219", "219AB", "220", "220AA", "241AB", "244AC",
];

const PIN_COUNTS_QFP: &[&str] = &["100", "128", "144", "176", "208", "32", "44", "48", "52", "64", "80"];

const PIN_COUNTS_QUAD: &[&str] = &[
    "4", "5", "6", "8", "10", "14", "16", "20", "24", "28", "32", "38", "40", "44", "48", "52", "56",
    "64", "68", "80", "100", "112", "120", "128", "144", "176", "208",
];

const PIN_COUNTS_QFN: &[&str] = &[
    "4", "5", "6", "8", "10", "12", "14", "16", "20", "24", "28", "32", "38", "40", "44", "48", "52",
    "56", "64", "68", "80", "100", "112", "120", "128", "144", "176", "208",
];

const PIN_COUNTS_SOP: &[&str] = &[
    "4", "5", "6", "8", "10", "12", "14", "16", "18", "20", "24", "28", "30", "32", "36", "38", "44",
    "48", "54", "56",
];

const PIN_COUNTS_DIP: &[&str] = &[
    "4", "6", "8", "10", "12", "14", "16", "18", "20", "22", "24", "28", "32", "36", "40", "42", "48",
    "64",
];

const PIN_COUNTS_DIL: &[&str] = &[
    "4", "6", "8", "14", "16", "18", "20", "22", "24", "28", "32", "36", "40", "42", "48", "64",
];

const BALL_COUNTS_BGA: &[&str] = &[
    "4", "5", "6", "48", "63", "64", "90", "96", "108", "113", "119", "121", "132", "144", "165",
    "191", "208", "256", "324", "400", "480", "484", "672", "676", "780", "783", "896", "900", "1152",
    "1156", "1517", "1704", "1760", "1932",
];

const SOD_OUTLINES: &[&str] = &[
    "27", "57", "61", "64", "66", "68", "80", "81", "83", "87", "88", "89", "91", "107", "118", "119",
    "121", "125",
];

/// The package catalog, in precedence order.
pub static FAMILIES: &[PackageFamily] = &[
    PackageFamily::new("TO", "TO-?").with_variants(TO_OUTLINES),
    // Infineon PG-TO218 outlines
    PackageFamily::new("TO-218", "TO-?218").with_variants(&["AB-5", "-5-146"]),
    PackageFamily::new("SOT-93", "SOT-?93"),
    PackageFamily::new("TO-92", "TO-?92").with_variants(&["-3"]).optional(),
    PackageFamily::new("TO-220", "I?TO-?220")
        .with_variants(&["AB", "AC", "F", "FP", "SG", "-3", "-5", "ISO", "-ISO"])
        .optional(),
    PackageFamily::new("TOP-3", "TOP-?").with_variants(&["3"]),
    // TO-3P is the same body as TO-247
    PackageFamily::new("TO-247", "TO-?")
        .with_variants(&["247(?:AC|AD|-3)?", "3", "3P", "3PF", "3PN"]),
    PackageFamily::new("SOT", "SOT-?").with_variants(SOT_OUTLINES),
    PackageFamily::new("SOT (SMD)", "SOT-?").with_variants(&["24", "25", "26", "563"]),
    PackageFamily::new("QFP", "(?:LF|L|M|P|V|VF)?QFPN?-?").with_variants(PIN_COUNTS_QFP),
    PackageFamily::new("DIL", "DIL-?").with_variants(PIN_COUNTS_DIL),
    PackageFamily::new("SOP", r"(?:(?:H|HT|HTS|LS|M|S|T|TS|TV|Q|V|VS)?SOP?|SOIC)-?")
        .with_variants(PIN_COUNTS_SOP)
        .with_suffix("(?:-J|-W|-EP|-POWERPAD)?"),
    PackageFamily::new("DIP", "(?:CERDIP|CDIP|PDIP|DIP|MDIP|EDIP)-?").with_variants(PIN_COUNTS_DIP),
    // slim (0.3") plastic DIP
    PackageFamily::new("SDIP", "SP?DIP-?")
        .with_variants(&["24", "28", "32", "40", "42", "52", "56", "64"]),
    PackageFamily::new("HC-49", "HC-?49").with_suffix("(?:[/-]?[US])?"),
    PackageFamily::new("DO", "DO-?").with_variants(DO_OUTLINES),
    PackageFamily::new("CB-429", "CB-?429"),
    PackageFamily::new("SOD", "SOD-?").with_variants(SOD_OUTLINES),
    PackageFamily::new("SOD (flat lead)", "SOD-?")
        .with_variants(&["323", "523"])
        .with_suffix("F?"),
    PackageFamily::new("SC-90", "SC-?").with_variants(&["90", "59A"]),
    PackageFamily::new("TO-236AA", "TO-?236AA"),
    PackageFamily::new(
        "QFN",
        "(?:CDFN|DFN|DQFN|DRMLF|LLP|LPCC|MLF|TMLF|MLPD|MLPM|MLPQ|QFN|QFN-TEP|TDFN|TQFN|UQFN|UTDFN|VQFN|WQFN|XDFN|DHVQFN|WDFN|UDFN)-?",
    )
    .with_variants(PIN_COUNTS_QFN)
    .with_suffix("-?(?:EP|S)?"),
    PackageFamily::new(
        "QFP (body variants)",
        "(?:BQFP|BQFPH|CQFP|EQFP|FQFP|LQFP|MQFP|NQFP|SQFP|TDFP|TQFP|VQFP|VTQFP|HTQFP)[- ]?",
    )
    .with_variants(PIN_COUNTS_QUAD),
    // TSOT is the thin variant of SOT-23
    PackageFamily::new("SOT-23", "T?SOT-?23-?")
        .with_variants(&["3", "5", "6", "8"])
        .optional(),
    PackageFamily::new("SC-70", "SC-?70-?")
        .with_variants(&["3", "4", "5", "6"])
        .optional(),
    PackageFamily::new("SOT-416FL", "SOT-?416FL"),
    PackageFamily::new("EMT3F", "EMT3F"),
    PackageFamily::new("SC-89", "SC-?89"),
    PackageFamily::new("TSOT-5", "TSOT-?5"),
    PackageFamily::new("TO-253", "TO-?253"),
    PackageFamily::new("T-63", "T-?63"),
    PackageFamily::new("SOT-227", "(?:SOT-?227(?:B|-4)?)|ISOTOP"),
    PackageFamily::new("SOT-223", "SOT-?223-?")
        .with_variants(&["3", "4", "5", "6", "8"])
        .optional(),
    PackageFamily::new("SC-73", "(?:SC-?73)|(?:TO-?261AA)|(?:SM-?8)"),
    PackageFamily::new("SOT-89", "SOT?-89-?")
        .with_variants(&["3", "4", "5"])
        .optional(),
    // power MOSFET modules
    PackageFamily::new("SP", "SP").with_variants(&["1", "3", "4", "6", "6-P"]),
    PackageFamily::new("Clipwatt", r"CLIPWATT(?:-|\s)?").with_variants(&["11", "15", "19"]),
    PackageFamily::new(
        "BGA",
        "(?:BGA|CABGA|CSPBGA|DSBGA|FBGA|FCBGA|FCPBGA|FPBGA|FTBGA|HBGA|PBGA|TBGA|TFBGA|TWBGA|UBGA|VFBGA)-?",
    )
    .with_variants(BALL_COUNTS_BGA),
    PackageFamily::new("DPAK", "(?:D-?PAK|D2PAK|DDPAK)-?")
        .with_variants(&["3", "5"])
        .optional(),
    PackageFamily::new("TO-252", "TO-?")
        .with_variants(&["252", "252-3", "252-5", "263", "263-5"])
        .with_suffix("(?:AA|AB)?"),
    PackageFamily::new("I2PAK", "I2PAK"),
    PackageFamily::new("SON", "(?:PG-TD|W|V|X|X2)?SON-?").with_variants(&["4", "6", "8", "10"]),
    PackageFamily::new("CSP", "(?:LFCSP|CSP|FCCSP|WL-CSP)-?")
        .with_variants(&["8", "10", "16", "20", "24", "32", "48", "64"])
        .with_suffix("-?(?:VQ|WD|WQ)?"),
    PackageFamily::new("Chip carrier", "(?:BCC|CLCC|LCC|LCCC|DLCC|PLCC)-?")
        .with_variants(&["4", "6", "8", "10", "20", "28", "32", "44", "52", "68", "84"]),
    // Maxim uMAX
    PackageFamily::new("uMAX", "(?:UMAX|USOP)-?").with_variants(&["8", "10"]),
    // Torex USP
    PackageFamily::new("USP", "USP(?:N|Q)?-?")
        .with_variants(&["3", "4", "6", "10"])
        .with_suffix("(?:B|B03)?"),
    PackageFamily::new("SC-75", "SC-?75A?"),
    PackageFamily::new("MiniSO", "MINISO-?").with_variants(&["8"]),
    PackageFamily::new("MELF (MMx)", "MM").with_variants(&["A", "B", "U"]),
    PackageFamily::new("MELF", r"(?:MICRO|MINI)?(?:-|\s)?MELF"),
    PackageFamily::new("SSOT", "SSOT-?").with_variants(&["24", "25", "26", "457"]),
    PackageFamily::new("SOT (SMD codes)", "SMQ|SM6|SMV|SC-?74"),
    PackageFamily::new("TO-277", "TO-?277A?"),
    PackageFamily::new("Z3", "Z3|SMPC"),
    PackageFamily::new("TO-262", "TO-?262").with_variants(&["AA"]).optional(),
    PackageFamily::new("SIL", "SI(?:L|P|LP)-?").with_variants(&[
        "5", "7", "9", "10", "11", "12", "13", "14", "15", "16", "17", "18", "23", "25", "30",
    ]),
    // zig-zag in-line
    PackageFamily::new("ZIP", "ZIP-?").with_variants(&["5", "9", "15", "20", "24", "40"]),
    PackageFamily::new("Pentawatt", "PENTAWATT").with_variants(&["-V"]).optional(),
    PackageFamily::new("TO-202", "TO-?202").with_suffix("(?:-[13])?"),
    PackageFamily::new("RD-91", "RD-?").with_variants(&["91"]),
    PackageFamily::new("SQL", "SQL-?").with_variants(&["5", "9", "11", "12", "15", "17", "23"]),
    PackageFamily::new("TOP-3D", "TOP-?3D"),
    PackageFamily::new("ISO-218", "ISO-?218"),
    // folded onto TO-220F by the alias table
    PackageFamily::new("SC-67", "SC-?67"),
];
