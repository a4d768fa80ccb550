use gomun_core::NotificationAudience;
use gomun_core::entities::NotificationItem;
use serde::Serialize;

/// Notifications shown before any backend data, partitioned by audience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationSeed {
    pub guest: Vec<NotificationItem>,
    pub expert: Vec<NotificationItem>,
    pub company: Vec<NotificationItem>,
}

impl NotificationSeed {
    /// A fresh copy of the built-in seed. Every call returns independent
    /// values, so one session's edits never leak into another's.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            guest: vec![
                NotificationItem {
                    id: "guest-1".into(),
                    title: "GOMUN을 둘러보세요".into(),
                    message: "로그인하면 전문가 매칭, 요청 진행 현황 등 더 많은 정보를 확인할 수 있어요."
                        .into(),
                    time: Some("방금 전".into()),
                    created_at: None,
                    read: None,
                    tag: Some("시작하기".into()),
                    action_label: Some("로그인하기".into()),
                    action_route: Some("/".into()),
                    from: None,
                },
                NotificationItem {
                    id: "guest-2".into(),
                    title: "Zero-Gap 매칭 소개".into(),
                    message: "기업 공백을 메워드리는 긴급 투입 프로세스를 확인해 보세요.".into(),
                    time: Some("1시간 전".into()),
                    created_at: None,
                    read: None,
                    tag: Some("소개".into()),
                    action_label: None,
                    action_route: None,
                    from: None,
                },
            ],
            expert: Vec::new(),
            company: Vec::new(),
        }
    }

    #[must_use]
    pub fn get(&self, audience: NotificationAudience) -> &[NotificationItem] {
        match audience {
            NotificationAudience::Guest => &self.guest,
            NotificationAudience::Expert => &self.expert,
            NotificationAudience::Company => &self.company,
        }
    }

    /// Owned copy of one audience's notifications.
    #[must_use]
    pub fn for_audience(&self, audience: NotificationAudience) -> Vec<NotificationItem> {
        self.get(audience).to_vec()
    }
}
