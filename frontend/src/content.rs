//! Fixed marketing copy for the landing page.

pub struct Feature {
    pub title: &'static str,
    pub desc: &'static str,
    pub accent: &'static str,
}

pub struct Crew {
    pub name: &'static str,
    pub region: &'static str,
    pub time: &'static str,
    pub members: u32,
    pub pace: &'static str,
    pub desc: &'static str,
    pub image: &'static str,
}

pub struct Run {
    pub date: &'static str,
    pub time: &'static str,
    pub place: &'static str,
    pub km: u32,
    pub people: u32,
}

pub struct Review {
    pub name: &'static str,
    pub age: u32,
    pub period: &'static str,
    pub text: &'static str,
    pub rating: usize,
}

pub enum StatValue {
    /// Counts up from zero, shown with a trailing `+`.
    CountUp(u32),
    Fixed(&'static str),
}

pub struct Stat {
    pub label: &'static str,
    pub value: StatValue,
}

pub struct JoinStep {
    pub step: u32,
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// In-page anchor such as `#features`.
    Section(&'static str),
    Signup,
}

pub struct NavLink {
    pub label: &'static str,
    pub target: NavTarget,
}

pub const HERO_IMAGE: &str = "/assets/hero.jpg";
pub const PHONE_HREF: &str = "tel:0212345678";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "크루소개", target: NavTarget::Section("#features") },
    NavLink { label: "일정", target: NavTarget::Section("#schedule") },
    NavLink { label: "후기", target: NavTarget::Section("#reviews") },
    NavLink { label: "가입하기", target: NavTarget::Signup },
];

pub const FEATURES: &[Feature] = &[
    Feature { title: "레벨별 맞춤 크루", desc: "초보자부터 마라토너까지", accent: "#f97316" },
    Feature { title: "우리 동네에서", desc: "지역 기반 크루 매칭", accent: "#3b82f6" },
    Feature { title: "검증된 멤버", desc: "안전하고 신뢰할 수 있는 구성원", accent: "#10b981" },
    Feature { title: "목표 달성", desc: "개인/그룹 목표 설정 및 달성", accent: "#a855f7" },
    Feature { title: "실시간 소통", desc: "크루 채팅 및 일정 공유", accent: "#ec4899" },
    Feature { title: "러닝 후 모임", desc: "카페, 식사 등 소셜 활동", accent: "#6366f1" },
];

pub const CREWS: &[Crew] = &[
    Crew {
        name: "선셋 러너스",
        region: "서울 · 한강",
        time: "평일 19:30",
        members: 42,
        pace: "5'30\"",
        desc: "퇴근 후 노을과 함께 달리는 도심 러닝 크루",
        image: "/assets/club1.jpg",
    },
    Crew {
        name: "모닝 스프린트",
        region: "분당 · 탄천",
        time: "주말 07:00",
        members: 28,
        pace: "6'00\"",
        desc: "아침 햇살과 함께 상쾌하게 시작하는 주말 러닝",
        image: "/assets/club2.jpg",
    },
    Crew {
        name: "마라톤 준비반",
        region: "부산 · 광안리",
        time: "수/토 20:00",
        members: 36,
        pace: "5'00\"",
        desc: "하프/풀 완주를 목표로 체계적 훈련",
        image: "/assets/club3.jpg",
    },
    Crew {
        name: "소셜 조깅",
        region: "대구 · 수성못",
        time: "토 10:30",
        members: 31,
        pace: "6'30\"",
        desc: "수다 떨며 가볍게 달리는 친목 중심",
        image: "/assets/club4.jpg",
    },
];

pub const SCHEDULE: &[Run] = &[
    Run { date: "월 8/12", time: "19:30", place: "뚝섬 유원지", km: 7, people: 18 },
    Run { date: "수 8/14", time: "20:00", place: "여의나루", km: 10, people: 24 },
    Run { date: "금 8/16", time: "19:30", place: "반포 한강공원", km: 8, people: 21 },
    Run { date: "일 8/18", time: "07:00", place: "탄천 합수부", km: 12, people: 12 },
];

pub const REVIEWS: &[Review] = &[
    Review { name: "민지", age: 27, period: "6개월", text: "혼자선 꾸준히 못했는데 크루 덕분에 10km 완주!", rating: 5 },
    Review { name: "현우", age: 31, period: "3개월", text: "분위기가 밝고 친절해요. 러닝이 즐거워졌어요.", rating: 5 },
    Review { name: "서연", age: 24, period: "1년", text: "마라톤 첫 완주! 함께라서 가능했습니다.", rating: 5 },
];

pub const STATS: &[Stat] = &[
    Stat { label: "총 크루 수", value: StatValue::CountUp(150) },
    Stat { label: "활성 멤버", value: StatValue::CountUp(2000) },
    Stat { label: "완주 기록", value: StatValue::CountUp(500) },
    Stat { label: "평균 만족도", value: StatValue::Fixed("4.8/5") },
];

pub const JOIN_STEPS: &[JoinStep] = &[
    JoinStep { step: 1, title: "회원가입", desc: "간단한 정보 입력" },
    JoinStep { step: 2, title: "크루 선택", desc: "나에게 맞는 크루" },
    JoinStep { step: 3, title: "러닝 시작", desc: "함께 도전하기" },
];

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "서비스",
        links: &["정기 러닝", "개인 트레이닝", "마라톤 준비", "건강 상담"],
    },
    FooterColumn {
        title: "커뮤니티",
        links: &["이벤트", "갤러리", "후기", "공지사항"],
    },
];

pub const CONTACT_LINES: &[&str] = &[
    "📧 info@runcrew.com",
    "📞 02-1234-5678",
    "📍 서울시 강남구 러닝로 123",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collections_have_expected_shape() {
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(CREWS.len(), 4);
        assert_eq!(SCHEDULE.len(), 4);
        assert_eq!(REVIEWS.len(), 3);
        assert_eq!(JOIN_STEPS.len(), 3);
    }

    #[test]
    fn ratings_are_out_of_five() {
        assert!(REVIEWS.iter().all(|r| (1..=5).contains(&r.rating)));
    }

    #[test]
    fn nav_ends_with_signup() {
        let (last, sections) = NAV_LINKS.split_last().unwrap();
        assert_eq!(last.target, NavTarget::Signup);
        assert!(sections
            .iter()
            .all(|l| matches!(l.target, NavTarget::Section(anchor) if anchor.starts_with('#'))));
    }

    #[test]
    fn images_are_served_from_assets() {
        let images = std::iter::once(HERO_IMAGE).chain(CREWS.iter().map(|c| c.image));
        for image in images {
            assert!(image.starts_with("/assets/") && image.ends_with(".jpg"), "{}", image);
        }
    }
}
