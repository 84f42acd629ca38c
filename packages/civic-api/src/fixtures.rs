// Static mock dataset for the social endpoints.
//
// Read-only for the lifetime of the process. Entities "created" through the
// API are synthesized separately and never appended here.

use lazy_static::lazy_static;

use crate::domains::social::models::{Article, Debate, Event, Post, PostKind, User, UserRole};
use crate::governorate::Governorate;

fn user(
    id: &str,
    name: &str,
    role: UserRole,
    governorate: Governorate,
    party: Option<&str>,
    verified: bool,
    bio: Option<&str>,
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        role,
        avatar_url: format!("https://i.pravatar.cc/150?u={}", id),
        verified,
        governorate,
        party: party.map(str::to_string),
        bio: bio.map(str::to_string),
    }
}

/// Fixture users are referenced by index; `user-N` lives at `N - 1`.
const USER_COUNT: usize = 8;

type Users = [User; USER_COUNT];

#[allow(clippy::too_many_arguments)]
fn post(
    id: &str,
    author: User,
    timestamp: &str,
    content: &str,
    kind: PostKind,
    media_url: Option<&str>,
    (likes, comments, shares): (u32, u32, u32),
    is_sponsored: bool,
    governorates: Vec<Governorate>,
) -> Post {
    Post {
        id: id.to_string(),
        author,
        timestamp: timestamp.to_string(),
        content: content.to_string(),
        media_url: media_url.map(str::to_string),
        likes,
        comments,
        shares,
        is_sponsored,
        kind,
        governorates,
    }
}

fn build_users() -> Users {
    use Governorate::*;
    use UserRole::*;

    [
        user(
            "user-1",
            "أحمد علي",
            Candidate,
            Baghdad,
            Some("تحالف النصر"),
            true,
            Some("مرشح عن بغداد، يركز على مكافحة الفساد وتحسين الخدمات."),
        ),
        user(
            "user-2",
            "فاطمة حسن",
            Candidate,
            Basra,
            Some("دولة القانون"),
            true,
            Some("مهندسة وناشطة في ملف المياه والبيئة في البصرة."),
        ),
        user(
            "user-3",
            "علي كريم",
            Candidate,
            Baghdad,
            Some("التيار الصدري"),
            false,
            None,
        ),
        user(
            "user-4",
            "مريم جاسم",
            Candidate,
            Erbil,
            Some("الحزب الديمقراطي الكردستاني"),
            true,
            Some("محامية تعمل على قضايا حقوق المرأة والتعليم."),
        ),
        user(
            "user-5",
            "يوسف خالد",
            Candidate,
            Nineveh,
            Some("تحالف النصر"),
            true,
            Some("يعمل على إعادة إعمار الموصل وعودة النازحين."),
        ),
        user("user-6", "زينب علي", Voter, Baghdad, None, false, None),
        user("user-7", "حسين عباس", Voter, Basra, None, false, None),
        user(
            "user-8",
            "ليلى محمود",
            Journalist,
            Najaf,
            None,
            true,
            Some("صحفية تغطي الشأن الانتخابي في الفرات الأوسط."),
        ),
    ]
}

fn build_posts(users: &Users) -> Vec<Post> {
    use Governorate::*;

    vec![
        post(
            "post-1",
            users[0].clone(),
            "2h ago",
            "زرنا اليوم أحياء الكرخ واستمعنا لمطالب الأهالي بشأن الكهرباء والماء.",
            PostKind::Post,
            None,
            (152, 34, 12),
            false,
            vec![Baghdad],
        ),
        post(
            "post-2",
            users[1].clone(),
            "3h ago",
            "ملوحة المياه في البصرة ليست قدراً. هذه خطتنا لمحطات التحلية.",
            PostKind::Post,
            Some("https://images.unsplash.com/photo-1548839140-29a749e1cf4d?w=600"),
            (98, 21, 7),
            true,
            vec![Basra],
        ),
        post(
            "post-3",
            users[2].clone(),
            "5h ago",
            "لقاء مفتوح مع الشباب في مدينة الصدر مساء الخميس.",
            PostKind::Reel,
            Some("https://images.unsplash.com/photo-1540910419892-4a36d2c3266c?w=400"),
            (310, 88, 41),
            false,
            vec![Baghdad],
        ),
        post(
            "post-4",
            users[3].clone(),
            "6h ago",
            "التعليم حق للجميع. نعمل على بناء مدارس جديدة في أربيل ودهوك.",
            PostKind::Post,
            None,
            (76, 9, 3),
            false,
            vec![Erbil, Dohuk],
        ),
        post(
            "post-5",
            users[4].clone(),
            "8h ago",
            "الموصل تستحق إعماراً حقيقياً، لا وعوداً.",
            PostKind::Reel,
            Some("https://images.unsplash.com/photo-1599518559222-1b6a71ac337d?w=400"),
            (204, 47, 19),
            false,
            vec![Nineveh],
        ),
        post(
            "post-6",
            users[0].clone(),
            "1d ago",
            "شكراً لكل من حضر ندوة الأمس عن النزاهة في العمل الحكومي.",
            PostKind::Post,
            None,
            (131, 22, 5),
            false,
            vec![Baghdad, Babil],
        ),
        post(
            "post-7",
            users[7].clone(),
            "1d ago",
            "تقرير ميداني: استعدادات المفوضية في النجف وكربلاء.",
            PostKind::Post,
            None,
            (57, 6, 14),
            false,
            vec![Najaf, Karbala],
        ),
        post(
            "post-8",
            users[1].clone(),
            "2d ago",
            "جولة في أسواق العشار مع أصحاب المحلات.",
            PostKind::Reel,
            Some("https://images.unsplash.com/photo-1526481280695-3c4691a5d5f2?w=400"),
            (89, 13, 4),
            false,
            vec![Basra],
        ),
    ]
}

fn build_events(users: &Users) -> Vec<Event> {
    use Governorate::*;

    vec![
        Event {
            id: "event-1".to_string(),
            title: "لقاء مفتوح مع المرشحين".to_string(),
            date: "2025-10-20T17:00:00.000Z".to_string(),
            location: "قاعة المنصور، بغداد".to_string(),
            organizer: users[0].clone(),
            governorate: Baghdad,
        },
        Event {
            id: "event-2".to_string(),
            title: "ندوة أزمة المياه".to_string(),
            date: "2025-10-22T16:00:00.000Z".to_string(),
            location: "جامعة البصرة".to_string(),
            organizer: users[1].clone(),
            governorate: Basra,
        },
        Event {
            id: "event-3".to_string(),
            title: "ورشة تمكين المرأة سياسياً".to_string(),
            date: "2025-10-25T10:00:00.000Z".to_string(),
            location: "مركز أربيل الثقافي".to_string(),
            organizer: users[3].clone(),
            governorate: Erbil,
        },
        Event {
            id: "event-4".to_string(),
            title: "مهرجان إعادة الإعمار".to_string(),
            date: "2025-10-28T15:00:00.000Z".to_string(),
            location: "جامعة الموصل".to_string(),
            organizer: users[4].clone(),
            governorate: Nineveh,
        },
    ]
}

fn build_debates(users: &Users) -> Vec<Debate> {
    vec![
        Debate {
            id: "debate-1".to_string(),
            title: "مستقبل الخدمات في بغداد".to_string(),
            topic: "الكهرباء والماء".to_string(),
            scheduled_time: "2025-10-30T19:00:00.000Z".to_string(),
            is_live: true,
            participants: vec![users[0].clone(), users[2].clone()],
            viewers: 1250,
        },
        Debate {
            id: "debate-2".to_string(),
            title: "الاقتصاد بعد النفط".to_string(),
            topic: "تنويع مصادر الدخل".to_string(),
            scheduled_time: "2025-11-02T19:00:00.000Z".to_string(),
            is_live: false,
            participants: vec![users[1].clone(), users[4].clone()],
            viewers: 0,
        },
        Debate {
            id: "debate-3".to_string(),
            title: "التعليم والشباب".to_string(),
            topic: "فرص العمل للخريجين".to_string(),
            scheduled_time: "2025-11-05T18:00:00.000Z".to_string(),
            is_live: false,
            participants: vec![users[3].clone(), users[0].clone()],
            viewers: 0,
        },
    ]
}

fn build_articles() -> Vec<Article> {
    use Governorate::*;

    vec![
        Article {
            id: "article-1".to_string(),
            title: "المفوضية تعلن جدول الحملات الانتخابية".to_string(),
            author_name: "ليلى محمود".to_string(),
            publication: "شبكة الإعلام العراقي".to_string(),
            content_snippet: "أعلنت المفوضية العليا المستقلة للانتخابات موعد انطلاق الحملات...".to_string(),
            timestamp: "2025-09-15".to_string(),
            url: "https://example.iq/news/ihec-campaign-schedule".to_string(),
            governorates: Governorate::ALL.to_vec(),
        },
        Article {
            id: "article-2".to_string(),
            title: "البصرة: المياه على رأس أولويات الناخبين".to_string(),
            author_name: "حسن الساعدي".to_string(),
            publication: "المدى".to_string(),
            content_snippet: "استطلاع رأي يظهر أن أزمة المياه تتصدر اهتمامات سكان البصرة...".to_string(),
            timestamp: "2025-09-18".to_string(),
            url: "https://example.iq/news/basra-water".to_string(),
            governorates: vec![Basra],
        },
        Article {
            id: "article-3".to_string(),
            title: "بغداد ونينوى: سباق محتدم على المقاعد".to_string(),
            author_name: "سارة الجبوري".to_string(),
            publication: "الصباح".to_string(),
            content_snippet: "تشهد الدوائر الانتخابية في بغداد ونينوى تنافساً كبيراً...".to_string(),
            timestamp: "2025-09-20".to_string(),
            url: "https://example.iq/news/baghdad-nineveh-race".to_string(),
            governorates: vec![Baghdad, Nineveh],
        },
        Article {
            id: "article-4".to_string(),
            title: "إقليم كردستان يستعد ليوم الاقتراع".to_string(),
            author_name: "كاوه أحمد".to_string(),
            publication: "روداو".to_string(),
            content_snippet: "استكملت دوائر الإقليم تجهيز مراكز الاقتراع في أربيل والسليمانية ودهوك...".to_string(),
            timestamp: "2025-09-22".to_string(),
            url: "https://example.iq/news/kurdistan-polling".to_string(),
            governorates: vec![Erbil, Sulaymaniyah, Dohuk],
        },
    ]
}

lazy_static! {
    pub static ref MOCK_USERS: Users = build_users();
    pub static ref MOCK_POSTS: Vec<Post> = build_posts(&MOCK_USERS);
    pub static ref MOCK_EVENTS: Vec<Event> = build_events(&MOCK_USERS);
    pub static ref MOCK_DEBATES: Vec<Debate> = build_debates(&MOCK_USERS);
    pub static ref MOCK_ARTICLES: Vec<Article> = build_articles();
}
