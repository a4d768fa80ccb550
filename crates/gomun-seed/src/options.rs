use serde::Serialize;

pub const KOREAN_REGIONS: &[&str] = &[
    "서울", "경기", "인천", "부산", "대구", "광주", "대전", "울산", "세종", "강원", "충북", "충남",
    "전북", "전남", "경북", "경남", "제주",
];

pub const CORE_CATEGORIES: &[&str] = &[
    "경영",
    "전략",
    "재무",
    "회계",
    "IR",
    "PM",
    "프로세스",
    "운영",
    "물류",
    "법무",
    "컴플라이언스",
    "계약",
    "데이터",
    "BI",
    "성과분석",
    "HR",
    "조직개편",
];

pub const AVAILABILITY_OPTIONS: &[&str] = &["즉시 투입", "48시간 이내", "1주 이내"];

pub const URGENCY_OPTIONS: &[&str] = &["즉시 투입", "48시간 이내", "2주 이내"];

/// Choice lists offered by registration and request forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOptions {
    pub regions: &'static [&'static str],
    pub categories: &'static [&'static str],
    pub availability: &'static [&'static str],
    pub urgency: &'static [&'static str],
}

impl FormOptions {
    pub const ALL: Self = Self {
        regions: KOREAN_REGIONS,
        categories: CORE_CATEGORIES,
        availability: AVAILABILITY_OPTIONS,
        urgency: URGENCY_OPTIONS,
    };
}
