use std::collections::HashMap;

use gomun_core::entities::{Expert, ExpertDraft};
use gomun_core::responses::RemoteExpert;

use crate::strings;

/// The built-in expert directory.
#[must_use]
pub fn seed() -> Vec<Expert> {
    vec![
        Expert {
            id: 1,
            name: "김한울".into(),
            title: "전략 컨설턴트".into(),
            region: "서울".into(),
            rating: 4.9,
            keywords: strings(&["경영", "전략", "조직개편"]),
            avatar: Some("/images/av1.svg".into()),
            years: Some(22),
            focus: Some("대기업 HQ 전략실 및 중견기업 중장기 PMO".into()),
            availability: Some("즉시 투입".into()),
            response_time: Some("평균 4시간".into()),
            email: Some("hanul@gomun.kr".into()),
            phone: Some("010-1234-5678".into()),
            website: Some("https://gomun.kr".into()),
        },
        Expert {
            id: 2,
            name: "박도윤".into(),
            title: "재무·회계 책임".into(),
            region: "경기".into(),
            rating: 4.7,
            keywords: strings(&["재무", "회계", "IR"]),
            avatar: Some("/images/av2.svg".into()),
            years: Some(25),
            focus: Some("IPO/IFRS 고도화 & 라운드별 재무 전략".into()),
            availability: Some("48시간 이내".into()),
            response_time: Some("평균 3시간".into()),
            email: Some("doyun@gomun.kr".into()),
            phone: Some("010-2345-6789".into()),
            website: Some("https://finance.gomun.kr".into()),
        },
        Expert {
            id: 3,
            name: "이서준".into(),
            title: "프로세스 혁신 PM".into(),
            region: "인천".into(),
            rating: 4.5,
            keywords: strings(&["PM", "프로세스", "운영"]),
            avatar: Some("/images/av3.svg".into()),
            years: Some(18),
            focus: Some("유통/CS 운영 표준화 및 옴니채널 구축".into()),
            availability: Some("1주 이내".into()),
            response_time: Some("평균 6시간".into()),
            email: Some("seojoon@gomun.kr".into()),
            phone: Some("010-3456-7890".into()),
            website: Some("https://ops.gomun.kr".into()),
        },
        Expert {
            id: 4,
            name: "최가람".into(),
            title: "글로벌 전략 고문".into(),
            region: "서울".into(),
            rating: 4.8,
            keywords: strings(&["전략", "IR", "컴플라이언스"]),
            avatar: Some("/images/av4.svg".into()),
            years: Some(24),
            focus: Some("Cross-border JV·미국 법인 전략 자문".into()),
            availability: Some("48시간 이내".into()),
            response_time: Some("평균 5시간".into()),
            email: Some("garam@gomun.kr".into()),
            phone: Some("010-9876-5432".into()),
            website: Some("https://global.gomun.kr".into()),
        },
        Expert {
            id: 5,
            name: "윤서진".into(),
            title: "HR 트랜스포메이션 리드".into(),
            region: "대전".into(),
            rating: 4.6,
            keywords: strings(&["HR", "조직개편", "성과분석"]),
            avatar: Some("/images/av5.svg".into()),
            years: Some(17),
            focus: Some("4.5일제 정착, OKR 리빌드, 리더십 코칭".into()),
            availability: Some("즉시 투입".into()),
            response_time: Some("평균 2시간".into()),
            email: Some("seojin@gomun.kr".into()),
            phone: Some("010-7654-3210".into()),
            website: Some("https://people.gomun.kr".into()),
        },
    ]
}

/// Storage for the expert directory with email-keyed upsert.
pub trait ExpertRepository {
    /// All experts in insertion order.
    fn list(&self) -> Vec<Expert>;

    fn get(&self, id: u64) -> Option<Expert>;

    fn find_by_email(&self, email: &str) -> Option<Expert>;

    /// Update the expert registered under `draft.email`, or append a new one.
    ///
    /// On a match the record keeps its id; required fields are replaced and
    /// optional fields only when the draft sets them. Otherwise the draft is
    /// stored under a fresh id, one above the highest id ever assigned. Drafts
    /// without an email always append.
    fn register_or_update(&mut self, draft: ExpertDraft) -> Expert;
}

/// Vec-backed [`ExpertRepository`] with an email index.
#[derive(Debug, Clone)]
pub struct InMemoryExpertRepository {
    experts: Vec<Expert>,
    by_email: HashMap<String, u64>,
    next_id: u64,
}

impl Default for InMemoryExpertRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryExpertRepository {
    /// Empty repository; the first id handed out is 1.
    #[must_use]
    pub fn new() -> Self {
        Self::from_experts(Vec::new())
    }

    /// Repository over [`seed`].
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_experts(seed())
    }

    #[must_use]
    pub fn from_experts(experts: Vec<Expert>) -> Self {
        let next_id = experts.iter().map(|e| e.id).max().map_or(1, |max| max + 1);
        let by_email = experts
            .iter()
            .filter_map(|e| e.email.clone().map(|email| (email, e.id)))
            .collect();
        Self {
            experts,
            by_email,
            next_id,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.experts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.experts.is_empty()
    }

    fn position_of(&self, id: u64) -> Option<usize> {
        self.experts.iter().position(|e| e.id == id)
    }
}

impl ExpertRepository for InMemoryExpertRepository {
    fn list(&self) -> Vec<Expert> {
        self.experts.clone()
    }

    fn get(&self, id: u64) -> Option<Expert> {
        self.experts.iter().find(|e| e.id == id).cloned()
    }

    fn find_by_email(&self, email: &str) -> Option<Expert> {
        let id = *self.by_email.get(email)?;
        self.get(id)
    }

    fn register_or_update(&mut self, draft: ExpertDraft) -> Expert {
        let existing = draft
            .email
            .as_deref()
            .and_then(|email| self.by_email.get(email))
            .and_then(|id| self.position_of(*id));

        if let Some(index) = existing {
            let expert = &mut self.experts[index];
            expert.apply(draft);
            tracing::debug!(id = expert.id, "updated expert");
            return expert.clone();
        }

        let id = self.next_id;
        self.next_id += 1;
        let expert = draft.into_expert(id);
        if let Some(email) = &expert.email {
            self.by_email.insert(email.clone(), id);
        }
        self.experts.push(expert.clone());
        tracing::debug!(id, "registered expert");
        expert
    }
}

/// Upsert every expert listed by the backend into `repo`.
///
/// The backend does not report keywords, so an already known expert keeps
/// the keywords it has. Title, region and rating the backend omits also keep
/// their stored values. Returns the stored records in `remote` order.
pub fn sync_remote_experts<R: ExpertRepository + ?Sized>(
    repo: &mut R,
    remote: Vec<RemoteExpert>,
) -> Vec<Expert> {
    remote
        .into_iter()
        .map(|remote| {
            let known = repo.find_by_email(&remote.email);
            let draft = merge_remote(remote, known);
            repo.register_or_update(draft)
        })
        .collect()
}

fn merge_remote(mut remote: RemoteExpert, known: Option<Expert>) -> ExpertDraft {
    let Some(known) = known else {
        return ExpertDraft::from(remote);
    };
    remote.title = remote.title.or(Some(known.title));
    remote.region = remote.region.or(Some(known.region));
    remote.rating = remote.rating.or(Some(known.rating));

    let mut draft = ExpertDraft::from(remote);
    draft.keywords = known.keywords;
    draft
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft(name: &str, email: Option<&str>) -> ExpertDraft {
        ExpertDraft {
            name: name.into(),
            title: "데이터 리드".into(),
            region: "부산".into(),
            rating: 4.0,
            email: email.map(Into::into),
            ..ExpertDraft::default()
        }
    }

    #[test]
    fn seed_has_five_experts_with_unique_emails() {
        let repo = InMemoryExpertRepository::seeded();
        assert_eq!(repo.len(), 5);
        for expert in repo.list() {
            let email = expert.email.as_deref().expect("seeded experts have email");
            assert_eq!(repo.find_by_email(email).map(|e| e.id), Some(expert.id));
        }
    }

    #[test]
    fn existing_email_updates_in_place() {
        let mut repo = InMemoryExpertRepository::seeded();
        let updated = repo.register_or_update(draft("박도윤 (수정)", Some("doyun@gomun.kr")));

        assert_eq!(updated.id, 2);
        assert_eq!(updated.name, "박도윤 (수정)");
        assert_eq!(updated.region, "부산");
        assert_eq!(updated.phone.as_deref(), Some("010-2345-6789"));
        assert_eq!(repo.len(), 5);
        assert_eq!(repo.get(2), Some(updated));
    }

    #[test]
    fn new_email_appends_with_next_id() {
        let mut repo = InMemoryExpertRepository::seeded();
        let created = repo.register_or_update(draft("정민", Some("min@gomun.kr")));
        assert_eq!(created.id, 6);
        assert_eq!(repo.len(), 6);

        let again = repo.register_or_update(draft("정민", Some("min@gomun.kr")));
        assert_eq!(again.id, 6);
        assert_eq!(repo.len(), 6);
    }

    #[test]
    fn drafts_without_email_always_append() {
        let mut repo = InMemoryExpertRepository::new();
        let first = repo.register_or_update(draft("익명", None));
        let second = repo.register_or_update(draft("익명", None));
        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn ids_continue_from_highest_existing_id() {
        let mut sparse = seed();
        sparse.retain(|e| e.id != 3);
        sparse[0].id = 40;
        let mut repo = InMemoryExpertRepository::from_experts(sparse);
        assert_eq!(repo.register_or_update(draft("a", Some("a@x.kr"))).id, 41);
        assert_eq!(repo.register_or_update(draft("b", Some("b@x.kr"))).id, 42);
    }
}
