use gomun_core::entities::Company;

use crate::strings;

/// The built-in company requests board.
#[must_use]
pub fn seed() -> Vec<Company> {
    vec![
        Company {
            id: 1,
            company: "라이즈웨이브".into(),
            company_type: "제조/테크".into(),
            role: "경영 공백 PMO".into(),
            headline: "4.5일제 전환으로 비는 HQ 전략 리드 보강".into(),
            job_category: "경영/전략".into(),
            region: "서울".into(),
            employment: "계약·프로젝트".into(),
            deadline: "11.16".into(),
            views: 2_971,
            keywords: strings(&["경영", "전략", "PMO"]),
            urgency: "즉시 투입".into(),
            mode: "하이브리드 · 주3회".into(),
            duration: "6주".into(),
            budget: "월 240만원".into(),
            description: "HQ 전략실장이 장기 휴가 중입니다. 사업 로드맵·EXCO 보고 체계를 이어받아 줄 시니어 전략 리드가 필요합니다."
                .into(),
        },
        Company {
            id: 2,
            company: "디오페이크".into(),
            company_type: "AI·SaaS".into(),
            role: "재무·회계 총괄".into(),
            headline: "시리즈C 직전, 연말 결산/IR 체계 긴급 구축".into(),
            job_category: "재무/회계".into(),
            region: "경기".into(),
            employment: "컨설턴트".into(),
            deadline: "11.17".into(),
            views: 9_501,
            keywords: strings(&["재무", "회계", "IR"]),
            urgency: "48시간 이내".into(),
            mode: "원격 · 주4회".into(),
            duration: "8주".into(),
            budget: "총 1,200만원".into(),
            description: "라운드 완료 직후 IFRS 기반 검증과 IR 데이터룸 정리가 동시에 필요합니다. Big4 파트너 출신이면 우대합니다."
                .into(),
        },
        Company {
            id: 3,
            company: "그로운랩".into(),
            company_type: "리테일".into(),
            role: "프로세스 혁신 리드".into(),
            headline: "신규 브랜드 론칭, CS/풀필먼트 동시 체계화".into(),
            job_category: "운영/물류".into(),
            region: "인천".into(),
            employment: "프로젝트".into(),
            deadline: "11.18".into(),
            views: 7_439,
            keywords: strings(&["운영", "프로세스", "물류"]),
            urgency: "2주 이내".into(),
            mode: "현장 · 주5일".into(),
            duration: "4주".into(),
            budget: "총 1,400만원".into(),
            description: "D2C·오프라인 동시 론칭으로 CX 표준·물류 SLA 재설계가 필요합니다. 프로세스 디자인 경험자를 찾습니다."
                .into(),
        },
        Company {
            id: 4,
            company: "바다로지스틱스".into(),
            company_type: "물류".into(),
            role: "해외 물류 컨트롤타워".into(),
            headline: "미국 서부 신규 항만 런칭 리스크 점검".into(),
            job_category: "해외전략".into(),
            region: "부산".into(),
            employment: "프로젝트".into(),
            deadline: "11.19".into(),
            views: 3_303,
            keywords: strings(&["물류", "운영", "해외전략"]),
            urgency: "48시간 이내".into(),
            mode: "하이브리드 · 주3일".into(),
            duration: "3주".into(),
            budget: "총 780만원".into(),
            description: "긴급 보험·선사 리스 계약을 동시에 다룰 수 있는 글로벌 물류 전문가를 찾습니다. 북미 네트워크가 있으면 가산점."
                .into(),
        },
        Company {
            id: 5,
            company: "먼데이바이브".into(),
            company_type: "미디어".into(),
            role: "HR/조직 고문".into(),
            headline: "OKR 리프레시 & 4.5일제 연착륙 가이드".into(),
            job_category: "HR".into(),
            region: "대전".into(),
            employment: "컨설턴트".into(),
            deadline: "11.20".into(),
            views: 5_120,
            keywords: strings(&["HR", "조직개편", "운영"]),
            urgency: "즉시 투입".into(),
            mode: "원격 · 주2회".into(),
            duration: "5주".into(),
            budget: "총 900만원".into(),
            description: "100인 규모 조직의 OKR 리디자인과 리더십 코칭을 동시 진행해야 합니다. 4.5일제 도입 경험자를 우선 검토합니다."
                .into(),
        },
        Company {
            id: 6,
            company: "데이터인사이트".into(),
            company_type: "플랫폼".into(),
            role: "BI/데이터 스트래티지스트".into(),
            headline: "리텐션 추적 KPI와 보고 체계 풀 리뉴얼".into(),
            job_category: "데이터/BI".into(),
            region: "서울".into(),
            employment: "프로젝트".into(),
            deadline: "11.23".into(),
            views: 6_988,
            keywords: strings(&["데이터", "BI", "성과분석"]),
            urgency: "2주 이내".into(),
            mode: "원격 · 주3일".into(),
            duration: "6주".into(),
            budget: "총 1,100만원".into(),
            description: "구독형 서비스 리텐션 분석·코호트 진단·데이터 거버넌스까지 한 번에 묶을 시니어 BI 리더를 찾습니다."
                .into(),
        },
    ]
}

/// Read-only lookup over company requests.
#[derive(Debug, Clone)]
pub struct CompanyCatalog {
    companies: Vec<Company>,
}

impl CompanyCatalog {
    #[must_use]
    pub const fn new(companies: Vec<Company>) -> Self {
        Self { companies }
    }

    /// Catalog over [`seed`].
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed())
    }

    #[must_use]
    pub fn list(&self) -> &[Company] {
        &self.companies
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Company> {
        self.companies.iter().find(|company| company.id == id)
    }

    /// Requests in `region`, in board order.
    pub fn in_region<'a>(&'a self, region: &'a str) -> impl Iterator<Item = &'a Company> + 'a {
        self.companies
            .iter()
            .filter(move |company| company.region == region)
    }
}
