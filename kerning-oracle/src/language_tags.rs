//! OpenType language system tags and the BCP 47 language tags they stand for.
//!
//! Derived from HarfBuzz's `hb-ot-tag-table.hh`, keeping one language per
//! language system tag.

use skrifa::Tag;

/// Sorted by tag so it can be binary searched.
pub(crate) static LANGUAGE_SYSTEM_TAGS: &[(Tag, &str)] = &[
    (Tag::new(b"ABA "), "abq"),
    (Tag::new(b"ABK "), "ab"),
    (Tag::new(b"ACR "), "acr"),
    (Tag::new(b"AFK "), "af"),
    (Tag::new(b"AFR "), "aa"),
    (Tag::new(b"AGW "), "ahg"),
    (Tag::new(b"AKA "), "fat"),
    (Tag::new(b"AKB "), "akb"),
    (Tag::new(b"ALS "), "gsw"),
    (Tag::new(b"ALT "), "atv"),
    (Tag::new(b"AMH "), "am"),
    (Tag::new(b"ARA "), "ssh"),
    (Tag::new(b"ARG "), "an"),
    (Tag::new(b"ARI "), "aiw"),
    (Tag::new(b"ARK "), "ybd"),
    (Tag::new(b"ASM "), "as"),
    (Tag::new(b"ATH "), "xup"),
    (Tag::new(b"AVR "), "av"),
    (Tag::new(b"AYM "), "ayr"),
    (Tag::new(b"AZB "), "azb"),
    (Tag::new(b"AZE "), "azj"),
    (Tag::new(b"BAD "), "bfq"),
    (Tag::new(b"BAD0"), "zmz"),
    (Tag::new(b"BAG "), "ppa"),
    (Tag::new(b"BAL "), "krc"),
    (Tag::new(b"BAU "), "bci"),
    (Tag::new(b"BBC "), "bbc"),
    (Tag::new(b"BBR "), "zgh"),
    (Tag::new(b"BCH "), "bcq"),
    (Tag::new(b"BEL "), "be"),
    (Tag::new(b"BEN "), "bn"),
    (Tag::new(b"BGQ "), "bgq"),
    (Tag::new(b"BGR "), "bg"),
    (Tag::new(b"BHI "), "bhb"),
    (Tag::new(b"BIK "), "ubl"),
    (Tag::new(b"BIL "), "byn"),
    (Tag::new(b"BIS "), "bi"),
    (Tag::new(b"BKF "), "bla"),
    (Tag::new(b"BLI "), "bgp"),
    (Tag::new(b"BLK "), "blk"),
    (Tag::new(b"BLN "), "ble"),
    (Tag::new(b"BLT "), "bft"),
    (Tag::new(b"BMB "), "bm"),
    (Tag::new(b"BML "), "ybb"),
    (Tag::new(b"BOS "), "sh"),
    (Tag::new(b"BRE "), "br"),
    (Tag::new(b"BRI "), "bra"),
    (Tag::new(b"BRM "), "my"),
    (Tag::new(b"BSH "), "ba"),
    (Tag::new(b"BTD "), "btd"),
    (Tag::new(b"BTI "), "mct"),
    (Tag::new(b"BTK "), "btz"),
    (Tag::new(b"BTM "), "btm"),
    (Tag::new(b"BTS "), "bts"),
    (Tag::new(b"BTX "), "btx"),
    (Tag::new(b"BTZ "), "btz"),
    (Tag::new(b"BYV "), "byv"),
    (Tag::new(b"CAK "), "cak"),
    (Tag::new(b"CAT "), "ca"),
    (Tag::new(b"CBK "), "cbk"),
    (Tag::new(b"CCHN"), "cvn"),
    (Tag::new(b"CHA "), "ch"),
    (Tag::new(b"CHE "), "ce"),
    (Tag::new(b"CHG "), "sgw"),
    (Tag::new(b"CHH "), "hne"),
    (Tag::new(b"CHI "), "ny"),
    (Tag::new(b"CHK "), "ckt"),
    (Tag::new(b"CHK0"), "chk"),
    (Tag::new(b"CHP "), "chp"),
    (Tag::new(b"CHU "), "cv"),
    (Tag::new(b"CMR "), "zdj"),
    (Tag::new(b"COR "), "kw"),
    (Tag::new(b"COS "), "co"),
    (Tag::new(b"CPP "), "xmm"),
    (Tag::new(b"CRE "), "cwd"),
    (Tag::new(b"CRR "), "crx"),
    (Tag::new(b"CRT "), "crh"),
    (Tag::new(b"CSL "), "cu"),
    (Tag::new(b"CSY "), "cs"),
    (Tag::new(b"DAN "), "da"),
    (Tag::new(b"DCR "), "cwd"),
    (Tag::new(b"DEU "), "de"),
    (Tag::new(b"DGO "), "dgo"),
    (Tag::new(b"DGR "), "xnr"),
    (Tag::new(b"DHV "), "dv"),
    (Tag::new(b"DIQ "), "diq"),
    (Tag::new(b"DIV "), "dv"),
    (Tag::new(b"DJR "), "dje"),
    (Tag::new(b"DJR0"), "djr"),
    (Tag::new(b"DNG "), "ada"),
    (Tag::new(b"DNK "), "dks"),
    (Tag::new(b"DRI "), "tnf"),
    (Tag::new(b"DUJ "), "dwy"),
    (Tag::new(b"DUN "), "dng"),
    (Tag::new(b"DZN "), "adp"),
    (Tag::new(b"EBI "), "igb"),
    (Tag::new(b"ECR "), "crl"),
    (Tag::new(b"EDO "), "bin"),
    (Tag::new(b"ELL "), "el"),
    (Tag::new(b"EMK "), "emk"),
    (Tag::new(b"ENG "), "en"),
    (Tag::new(b"ERZ "), "myv"),
    (Tag::new(b"ESP "), "es"),
    (Tag::new(b"ETI "), "ekk"),
    (Tag::new(b"EUQ "), "eu"),
    (Tag::new(b"EVK "), "evn"),
    (Tag::new(b"EVN "), "eve"),
    (Tag::new(b"EWE "), "ee"),
    (Tag::new(b"FAN "), "acf"),
    (Tag::new(b"FAN0"), "fan"),
    (Tag::new(b"FAR "), "tnf"),
    (Tag::new(b"FAT "), "fat"),
    (Tag::new(b"FIN "), "fi"),
    (Tag::new(b"FJI "), "fj"),
    (Tag::new(b"FLE "), "vls"),
    (Tag::new(b"FMP "), "fmp"),
    (Tag::new(b"FNE "), "enf"),
    (Tag::new(b"FOS "), "fo"),
    (Tag::new(b"FRA "), "fr"),
    (Tag::new(b"FRI "), "fy"),
    (Tag::new(b"FRL "), "fur"),
    (Tag::new(b"FTA "), "fuf"),
    (Tag::new(b"FUL "), "fuv"),
    (Tag::new(b"FUV "), "fuv"),
    (Tag::new(b"GAD "), "gaa"),
    (Tag::new(b"GAE "), "gd"),
    (Tag::new(b"GAL "), "gl"),
    (Tag::new(b"GAW "), "gbm"),
    (Tag::new(b"GIL "), "niv"),
    (Tag::new(b"GIL0"), "gil"),
    (Tag::new(b"GKP "), "gkp"),
    (Tag::new(b"GMZ "), "guk"),
    (Tag::new(b"GON "), "wsg"),
    (Tag::new(b"GRN "), "kl"),
    (Tag::new(b"GRO "), "grt"),
    (Tag::new(b"GUA "), "nhd"),
    (Tag::new(b"GUJ "), "gu"),
    (Tag::new(b"HAI "), "ht"),
    (Tag::new(b"HAI0"), "hdn"),
    (Tag::new(b"HAL "), "flm"),
    (Tag::new(b"HAR "), "hoj"),
    (Tag::new(b"HAU "), "ha"),
    (Tag::new(b"HBN "), "amf"),
    (Tag::new(b"HER "), "hz"),
    (Tag::new(b"HIN "), "hi"),
    (Tag::new(b"HMA "), "mrj"),
    (Tag::new(b"HMD "), "hmd"),
    (Tag::new(b"HMN "), "sfm"),
    (Tag::new(b"HMO "), "ho"),
    (Tag::new(b"HMZ "), "hmz"),
    (Tag::new(b"HND "), "hno"),
    (Tag::new(b"HO  "), "hoc"),
    (Tag::new(b"HRI "), "har"),
    (Tag::new(b"HRV "), "sh"),
    (Tag::new(b"HUN "), "hu"),
    (Tag::new(b"HYE "), "hyw"),
    (Tag::new(b"HYE0"), "hy"),
    (Tag::new(b"IBA "), "snb"),
    (Tag::new(b"IBO "), "ig"),
    (Tag::new(b"IDO "), "io"),
    (Tag::new(b"IJO "), "orr"),
    (Tag::new(b"ILE "), "ie"),
    (Tag::new(b"INA "), "ia"),
    (Tag::new(b"IND "), "in"),
    (Tag::new(b"ING "), "inh"),
    (Tag::new(b"INU "), "ikt"),
    (Tag::new(b"INUK"), "ike"),
    (Tag::new(b"IPK "), "esk"),
    (Tag::new(b"IRI "), "ga"),
    (Tag::new(b"ISL "), "is"),
    (Tag::new(b"ISM "), "smn"),
    (Tag::new(b"ITA "), "it"),
    (Tag::new(b"IWR "), "iw"),
    (Tag::new(b"JAM "), "jam"),
    (Tag::new(b"JAN "), "ja"),
    (Tag::new(b"JAV "), "jw"),
    (Tag::new(b"JII "), "yih"),
    (Tag::new(b"JUD "), "lad"),
    (Tag::new(b"JUL "), "dyu"),
    (Tag::new(b"KAB "), "kbd"),
    (Tag::new(b"KAB0"), "kab"),
    (Tag::new(b"KAC "), "kfr"),
    (Tag::new(b"KAL "), "tuy"),
    (Tag::new(b"KAN "), "kn"),
    (Tag::new(b"KAR "), "krc"),
    (Tag::new(b"KAT "), "ka"),
    (Tag::new(b"KAZ "), "kk"),
    (Tag::new(b"KEA "), "kea"),
    (Tag::new(b"KEB "), "ktb"),
    (Tag::new(b"KEK "), "kek"),
    (Tag::new(b"KHA "), "kjh"),
    (Tag::new(b"KHK "), "kca"),
    (Tag::new(b"KHM "), "km"),
    (Tag::new(b"KHN "), "kht"),
    (Tag::new(b"KHS "), "kca"),
    (Tag::new(b"KHT "), "kht"),
    (Tag::new(b"KHV "), "kca"),
    (Tag::new(b"KIK "), "ki"),
    (Tag::new(b"KIR "), "ky"),
    (Tag::new(b"KIS "), "kss"),
    (Tag::new(b"KIU "), "kiu"),
    (Tag::new(b"KJP "), "kjp"),
    (Tag::new(b"KKN "), "kex"),
    (Tag::new(b"KLM "), "xal"),
    (Tag::new(b"KMB "), "kam"),
    (Tag::new(b"KMN "), "kfy"),
    (Tag::new(b"KMO "), "kmw"),
    (Tag::new(b"KMS "), "kxc"),
    (Tag::new(b"KNR "), "krt"),
    (Tag::new(b"KOD "), "kfa"),
    (Tag::new(b"KOH "), "okm"),
    (Tag::new(b"KOK "), "knn"),
    (Tag::new(b"KOM "), "kpv"),
    (Tag::new(b"KON "), "ktu"),
    (Tag::new(b"KON0"), "ldi"),
    (Tag::new(b"KOP "), "koi"),
    (Tag::new(b"KOR "), "ko"),
    (Tag::new(b"KOZ "), "kpv"),
    (Tag::new(b"KPL "), "xpe"),
    (Tag::new(b"KRI "), "kri"),
    (Tag::new(b"KRK "), "kaa"),
    (Tag::new(b"KRM "), "kdr"),
    (Tag::new(b"KRN "), "wea"),
    (Tag::new(b"KRT "), "kqy"),
    (Tag::new(b"KSH "), "ks"),
    (Tag::new(b"KSH0"), "ksh"),
    (Tag::new(b"KSI "), "kha"),
    (Tag::new(b"KSM "), "sjd"),
    (Tag::new(b"KSW "), "ksw"),
    (Tag::new(b"KUA "), "kj"),
    (Tag::new(b"KUI "), "uki"),
    (Tag::new(b"KUL "), "kfx"),
    (Tag::new(b"KUR "), "sdh"),
    (Tag::new(b"KUU "), "kxl"),
    (Tag::new(b"KUY "), "kdt"),
    (Tag::new(b"KYK "), "kpy"),
    (Tag::new(b"KYU "), "kyu"),
    (Tag::new(b"LAD "), "lld"),
    (Tag::new(b"LAH "), "bfu"),
    (Tag::new(b"LAK "), "lbe"),
    (Tag::new(b"LAM "), "lmn"),
    (Tag::new(b"LAO "), "lo"),
    (Tag::new(b"LAT "), "la"),
    (Tag::new(b"LAZ "), "lzz"),
    (Tag::new(b"LCR "), "crm"),
    (Tag::new(b"LDK "), "lbj"),
    (Tag::new(b"LIM "), "li"),
    (Tag::new(b"LIN "), "ln"),
    (Tag::new(b"LMA "), "mhr"),
    (Tag::new(b"LMB "), "lif"),
    (Tag::new(b"LMW "), "ngl"),
    (Tag::new(b"LRC "), "zum"),
    (Tag::new(b"LSB "), "dsb"),
    (Tag::new(b"LSM "), "smj"),
    (Tag::new(b"LTH "), "lt"),
    (Tag::new(b"LTZ "), "lb"),
    (Tag::new(b"LUB "), "lu"),
    (Tag::new(b"LUG "), "lg"),
    (Tag::new(b"LUH "), "rag"),
    (Tag::new(b"LVI "), "lvs"),
    (Tag::new(b"MAH "), "mh"),
    (Tag::new(b"MAJ "), "mpe"),
    (Tag::new(b"MAK "), "vmw"),
    (Tag::new(b"MAL "), "ml"),
    (Tag::new(b"MAM "), "mam"),
    (Tag::new(b"MAN "), "mns"),
    (Tag::new(b"MAP "), "arn"),
    (Tag::new(b"MAR "), "mr"),
    (Tag::new(b"MAW "), "wry"),
    (Tag::new(b"MBN "), "smd"),
    (Tag::new(b"MCH "), "mnc"),
    (Tag::new(b"MCR "), "crm"),
    (Tag::new(b"MDE "), "men"),
    (Tag::new(b"MEN "), "mym"),
    (Tag::new(b"MFA "), "mfa"),
    (Tag::new(b"MFE "), "mfe"),
    (Tag::new(b"MIN "), "min"),
    (Tag::new(b"MIZ "), "lus"),
    (Tag::new(b"MKD "), "mk"),
    (Tag::new(b"MKR "), "mak"),
    (Tag::new(b"MLE "), "mdy"),
    (Tag::new(b"MLG "), "xmw"),
    (Tag::new(b"MLN "), "mlq"),
    (Tag::new(b"MLR "), "ml"),
    (Tag::new(b"MLY "), "zsm"),
    (Tag::new(b"MND "), "mnk"),
    (Tag::new(b"MNG "), "mvf"),
    (Tag::new(b"MNK "), "myq"),
    (Tag::new(b"MNX "), "gv"),
    (Tag::new(b"MOK "), "mdf"),
    (Tag::new(b"MOL "), "mo"),
    (Tag::new(b"MON "), "mnw"),
    (Tag::new(b"MONT"), "mnw"),
    (Tag::new(b"MOR "), "ary"),
    (Tag::new(b"MRI "), "mi"),
    (Tag::new(b"MTH "), "mai"),
    (Tag::new(b"MTS "), "mt"),
    (Tag::new(b"MUN "), "unr"),
    (Tag::new(b"MWW "), "mww"),
    (Tag::new(b"MYN "), "yua"),
    (Tag::new(b"NAG "), "nag"),
    (Tag::new(b"NAH "), "nuz"),
    (Tag::new(b"NAN "), "gld"),
    (Tag::new(b"NAS "), "nsk"),
    (Tag::new(b"NAU "), "na"),
    (Tag::new(b"NAV "), "nv"),
    (Tag::new(b"NCR "), "csw"),
    (Tag::new(b"NDB "), "nr"),
    (Tag::new(b"NDG "), "ng"),
    (Tag::new(b"NEP "), "npi"),
    (Tag::new(b"NHC "), "csw"),
    (Tag::new(b"NIS "), "tgj"),
    (Tag::new(b"NKL "), "nyn"),
    (Tag::new(b"NKO "), "nqo"),
    (Tag::new(b"NLD "), "nl"),
    (Tag::new(b"NOR "), "no"),
    (Tag::new(b"NSM "), "se"),
    (Tag::new(b"NTA "), "nod"),
    (Tag::new(b"NTO "), "eo"),
    (Tag::new(b"NYN "), "nn"),
    (Tag::new(b"OCI "), "oc"),
    (Tag::new(b"OCR "), "ojs"),
    (Tag::new(b"OJB "), "otw"),
    (Tag::new(b"ORI "), "spv"),
    (Tag::new(b"ORO "), "orc"),
    (Tag::new(b"OSS "), "os"),
    (Tag::new(b"PAA "), "sam"),
    (Tag::new(b"PAL "), "pi"),
    (Tag::new(b"PAN "), "pa"),
    (Tag::new(b"PAP "), "plp"),
    (Tag::new(b"PAP0"), "pap"),
    (Tag::new(b"PAS "), "pst"),
    (Tag::new(b"PIH "), "pih"),
    (Tag::new(b"PIL "), "fil"),
    (Tag::new(b"PLG "), "rbb"),
    (Tag::new(b"PLK "), "pl"),
    (Tag::new(b"POH "), "poh"),
    (Tag::new(b"PTG "), "pt"),
    (Tag::new(b"PWO "), "pwo"),
    (Tag::new(b"QIN "), "zyp"),
    (Tag::new(b"QUC "), "quc"),
    (Tag::new(b"QUH "), "qus"),
    (Tag::new(b"QUZ "), "qxw"),
    (Tag::new(b"QVI "), "qxr"),
    (Tag::new(b"QWH "), "qxw"),
    (Tag::new(b"RAJ "), "wbr"),
    (Tag::new(b"RBU "), "bxr"),
    (Tag::new(b"RCR "), "atj"),
    (Tag::new(b"RIF "), "rif"),
    (Tag::new(b"RMS "), "rm"),
    (Tag::new(b"RMY "), "rmy"),
    (Tag::new(b"ROM "), "ro"),
    (Tag::new(b"ROY "), "rom"),
    (Tag::new(b"RSY "), "rue"),
    (Tag::new(b"RUA "), "rw"),
    (Tag::new(b"RUN "), "rn"),
    (Tag::new(b"RUS "), "ru"),
    (Tag::new(b"SAD "), "sck"),
    (Tag::new(b"SAN "), "sa"),
    (Tag::new(b"SAY "), "chp"),
    (Tag::new(b"SCS "), "scs"),
    (Tag::new(b"SEK "), "xan"),
    (Tag::new(b"SFM "), "sfm"),
    (Tag::new(b"SGO "), "sg"),
    (Tag::new(b"SHI "), "shi"),
    (Tag::new(b"SIB "), "sjo"),
    (Tag::new(b"SIG "), "xst"),
    (Tag::new(b"SKS "), "sms"),
    (Tag::new(b"SKY "), "sk"),
    (Tag::new(b"SLA "), "xsl"),
    (Tag::new(b"SLV "), "sl"),
    (Tag::new(b"SML "), "so"),
    (Tag::new(b"SMO "), "sm"),
    (Tag::new(b"SNA "), "seh"),
    (Tag::new(b"SNA0"), "sn"),
    (Tag::new(b"SND "), "sd"),
    (Tag::new(b"SNH "), "si"),
    (Tag::new(b"SOG "), "gru"),
    (Tag::new(b"SOT "), "st"),
    (Tag::new(b"SQI "), "als"),
    (Tag::new(b"SRB "), "cnr"),
    (Tag::new(b"SRD "), "sro"),
    (Tag::new(b"SRK "), "skr"),
    (Tag::new(b"SSL "), "xsl"),
    (Tag::new(b"SSM "), "sma"),
    (Tag::new(b"SUN "), "su"),
    (Tag::new(b"SUR "), "suq"),
    (Tag::new(b"SVE "), "sv"),
    (Tag::new(b"SWA "), "aii"),
    (Tag::new(b"SWK "), "swh"),
    (Tag::new(b"SWZ "), "ss"),
    (Tag::new(b"SXT "), "xnq"),
    (Tag::new(b"SYR "), "tru"),
    (Tag::new(b"TAJ "), "tg"),
    (Tag::new(b"TAM "), "ta"),
    (Tag::new(b"TAT "), "tt"),
    (Tag::new(b"TCR "), "cwd"),
    (Tag::new(b"TEL "), "te"),
    (Tag::new(b"TGL "), "tl"),
    (Tag::new(b"TGN "), "to"),
    (Tag::new(b"TGR "), "tig"),
    (Tag::new(b"TGY "), "ti"),
    (Tag::new(b"THA "), "th"),
    (Tag::new(b"THT "), "ty"),
    (Tag::new(b"TIB "), "bo"),
    (Tag::new(b"TKM "), "tk"),
    (Tag::new(b"TMH "), "ttq"),
    (Tag::new(b"TMN "), "tem"),
    (Tag::new(b"TNA "), "tn"),
    (Tag::new(b"TNE "), "enh"),
    (Tag::new(b"TNG "), "toi"),
    (Tag::new(b"TOD "), "xwo"),
    (Tag::new(b"TOD0"), "tod"),
    (Tag::new(b"TPI "), "tpi"),
    (Tag::new(b"TRK "), "tr"),
    (Tag::new(b"TSG "), "ts"),
    (Tag::new(b"TUA "), "tru"),
    (Tag::new(b"TUL "), "tcy"),
    (Tag::new(b"TUV "), "tyv"),
    (Tag::new(b"TWI "), "tw"),
    (Tag::new(b"TZM "), "tzm"),
    (Tag::new(b"TZO "), "tzo"),
    (Tag::new(b"UKR "), "uk"),
    (Tag::new(b"URD "), "ur"),
    (Tag::new(b"USB "), "hsb"),
    (Tag::new(b"UYG "), "ug"),
    (Tag::new(b"UZB "), "uzs"),
    (Tag::new(b"VEN "), "ve"),
    (Tag::new(b"VIT "), "vi"),
    (Tag::new(b"VOL "), "vo"),
    (Tag::new(b"WA  "), "wbm"),
    (Tag::new(b"WAG "), "wbr"),
    (Tag::new(b"WCR "), "crk"),
    (Tag::new(b"WEL "), "cy"),
    (Tag::new(b"WLF "), "wo"),
    (Tag::new(b"WLN "), "wa"),
    (Tag::new(b"XBD "), "khb"),
    (Tag::new(b"XHS "), "xh"),
    (Tag::new(b"XPE "), "xpe"),
    (Tag::new(b"YAK "), "sah"),
    (Tag::new(b"YBA "), "yo"),
    (Tag::new(b"YCR "), "crl"),
    (Tag::new(b"YIM "), "ii"),
    (Tag::new(b"ZGH "), "zgh"),
    (Tag::new(b"ZHA "), "zzj"),
    (Tag::new(b"ZHH "), "yue"),
    (Tag::new(b"ZHS "), "wuu"),
    (Tag::new(b"ZHT "), "lzh"),
    (Tag::new(b"ZND "), "zne"),
    (Tag::new(b"ZUL "), "zu"),
    (Tag::new(b"ZZA "), "kiu"),
];

/// Returns the BCP 47 language tag for an OpenType language system tag.
pub fn bcp47_for_language_system(tag: Tag) -> Option<&'static str> {
    LANGUAGE_SYSTEM_TAGS
        .binary_search_by(|(probe, _)| probe.cmp(&tag))
        .ok()
        .map(|idx| LANGUAGE_SYSTEM_TAGS[idx].1)
}
