//! RFC 6350 vCard test fixtures.
//!
//! Examples taken from RFC 6350 and common address book exports.

/// RFC 6350 §8 - Author's vCard example
pub const VCARD_AUTHOR: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:Simon Perreault\r\n\
N:Perreault;Simon;;;ing. jr,M.Sc.\r\n\
BDAY:--0203\r\n\
ANNIVERSARY:20090808T1430-0500\r\n\
GENDER:M\r\n\
LANG;PREF=1:fr\r\n\
LANG;PREF=2:en\r\n\
ORG;TYPE=work:Viagenie\r\n\
ADR;TYPE=work:;Suite D2-630;2875 Laurier;\r\n\x20Quebec;QC;G1V 2M2;Canada\r\n\
TEL;VALUE=uri;TYPE=\"work,voice\";PREF=1:tel:+1-418-656-9254;ext=102\r\n\
TEL;VALUE=uri;TYPE=\"work,cell,voice,video,text\":tel:+1-418-262-6501\r\n\
EMAIL;TYPE=work:simon.perreault@viagenie.ca\r\n\
GEO;TYPE=work:geo:46.772673,-71.282945\r\n\
KEY;TYPE=work;VALUE=uri:\r\n\x20http://www.viagenie.ca/simon.perreault/simon.asc\r\n\
TZ:-0500\r\n\
URL;TYPE=home:http://nomis80.org\r\n\
END:VCARD\r\n";

/// Basic vCard 4.0
pub const VCARD_BASIC: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:John Doe\r\n\
N:Doe;John;;;\r\n\
EMAIL:john.doe@example.com\r\n\
TEL:+1-555-555-5555\r\n\
END:VCARD\r\n";

/// vCard with a group and Apple-style labels
pub const VCARD_GROUPED: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
PRODID:-//Apple Inc.//iPhone OS 17.0//EN\r\n\
FN:Jane Appleseed\r\n\
item1.EMAIL;TYPE=internet,pref:jane@example.com\r\n\
item1.X-ABLabel:_$!<Other>!$_\r\n\
item2.URL:https://example.com\r\n\
item2.X-ABLabel:_$!<HomePage>!$_\r\n\
END:VCARD\r\n";

/// Group card listing members by UID
pub const VCARD_GROUP_KIND: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
KIND:group\r\n\
FN:The Doe family\r\n\
MEMBER:urn:uuid:03a0e51f-d1aa-4385-8a53-e29025acd8af\r\n\
MEMBER:urn:uuid:b8767877-b4a1-4c70-9acc-505d3819e519\r\n\
CLIENTPIDMAP:1;urn:uuid:3df403f4-5924-4bb7-b077-3c711d9eb34b\r\n\
UID:urn:uuid:4fbe8971-0bc3-424c-9c26-36c3e1eff6b1\r\n\
REV:19951031T222710Z\r\n\
END:VCARD\r\n";

/// Localized names sharing an ALTID
pub const VCARD_ALTID: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN;ALTID=1;LANGUAGE=ja:\u{4f50}\u{85e4}\u{6e05}\r\n\
TITLE;ALTID=1;LANGUAGE=ja:\u{90e8}\u{9577}\r\n\
TITLE;ALTID=1;LANGUAGE=en:Manager\r\n\
NOTE:Line one\\nLine two\\, continued\r\n\
END:VCARD\r\n";
