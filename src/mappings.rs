//! Curation policy. Every list here is read-only and evaluated in declared
//! order wherever order matters.

use crate::channels::Channel;

/// Arab countries whose national feeds are fetched (Maghreb excluded).
pub const TARGET_COUNTRIES: &[&str] = &[
    "sa", "ae", "eg", "kw", "qa", "bh", "om", "iq", "jo", "lb", "ps", "sy", "ye", "sd",
];

/// Countries let through from genre feeds besides the targets.
pub const WESTERN_COUNTRIES: &[&str] = &["us", "uk", "ca"];

pub const COUNTRY_LABELS: &[(&str, &str)] = &[
    ("sa", "🇸🇦 Saudi Arabia | السعودية"),
    ("ae", "🇦🇪 UAE | الإمارات"),
    ("eg", "🇪🇬 Egypt | مصر"),
    ("kw", "🇰🇼 Kuwait | الكويت"),
    ("qa", "🇶🇦 Qatar | قطر"),
    ("bh", "🇧🇭 Bahrain | البحرين"),
    ("om", "🇴🇲 Oman | عمان"),
    ("iq", "🇮🇶 Iraq | العراق"),
    ("jo", "🇯🇴 Jordan | الأردن"),
    ("lb", "🇱🇧 Lebanon | لبنان"),
    ("ps", "🇵🇸 Palestine | فلسطين"),
    ("sy", "🇸🇾 Syria | سوريا"),
    ("ye", "🇾🇪 Yemen | اليمن"),
    ("sd", "🇸🇩 Sudan | السودان"),
    ("ly", "🇱🇾 Libya | ليبيا"),
    ("dz", "🇩🇿 Algeria | الجزائر"),
    ("ma", "🇲🇦 Morocco | المغرب"),
    ("tn", "🇹🇳 Tunisia | تونس"),
];

pub const CATEGORY_LABELS: &[(&str, &str)] = &[
    ("premium", "🏆 Premium | المميزة"),
    ("sports", "⚽ Sports | رياضة"),
    ("movies", "🎬 Movies | أفلام"),
    ("series", "📺 Series | مسلسلات"),
    ("comedy", "😂 Comedy | كوميديا"),
    ("kids", "👶 Kids | أطفال"),
    ("animation", "👶 Kids | أطفال"),
    ("documentary", "🧠 Documentary | وثائقيات"),
    ("education", "🧠 Documentary | وثائقيات"),
    ("religious", "🕋 Religious | إسلاميات"),
    ("news", "📰 News | أخبار"),
    ("family", "🏡 Family | العائلة"),
    ("lifestyle", "🧘 Lifestyle | نمط الحياة"),
    ("general", "🌍 General | منوعات"),
    ("auto", "🚗 Auto | سيارات"),
    ("business", "💼 Business | أعمال"),
    ("music", "🎵 Music | موسيقى"),
    ("classic", "🕰️ Classic | كلاسيكيات"),
];

/// Network name rules. The first key found in a name wins, so a shorter key
/// listed before a longer one shadows it.
pub const CHANNEL_NAMES: &[(&str, &str)] = &[
    ("MBC 1", "MBC 1 | إم بي سي 1"),
    ("MBC 2", "MBC 2 | إم بي سي 2"),
    ("MBC 3", "MBC 3 | إم بي سي 3"),
    ("MBC 4", "MBC 4 | إم بي سي 4"),
    ("MBC 5", "MBC 5 | إم بي سي 5"),
    ("MBC Action", "MBC Action | إم بي سي أكشن"),
    ("MBC Max", "MBC Max | إم بي سي ماكس"),
    ("MBC Drama", "MBC Drama | إم بي سي دراما"),
    ("MBC Bollywood", "MBC Bollywood | إم بي سي بوليوود"),
    ("MBC Masr", "MBC Masr | إم بي سي مصر"),
    ("MBC Iraq", "MBC Iraq | إم بي سي العراق"),
    ("Al Jazeera", "Al Jazeera | الجزيرة"),
    ("Al Jazeera Documentary", "Al Jazeera Documentary | الجزيرة الوثائقية"),
    ("Al Arabiya", "Al Arabiya | العربية"),
    ("Al Hadath", "Al Hadath | الحدث"),
    ("Sky News Arabia", "Sky News Arabia | سكاي نيوز عربية"),
    ("CNN International", "CNN International"),
    ("BBC World News", "BBC World News"),
    ("Osn", "OSN"),
    ("Rotana Cinema", "Rotana Cinema | روتانا سينما"),
    ("Rotana Comedy", "Rotana Comedy | روتانا كوميديا"),
    ("Rotana Classic", "Rotana Classic | روتانا كلاسيك"),
    ("Rotana Drama", "Rotana Drama | روتانا دراما"),
    ("Rotana Khalijia", "Rotana Khalijia | روتانا خليجية"),
    ("Rotana Clip", "Rotana Clip | روتانا كليب"),
    ("Rotana Music", "Rotana Music | روتانا موسيقى"),
    ("LBC", "LBC | إل بي سي"),
    ("MTV Lebanon", "MTV Lebanon | إم تي في اللبنانية"),
    ("Spacetoon", "Spacetoon | سبيستون"),
    ("Cartoon Network", "Cartoon Network | كرتون نتورك"),
    ("Nat Geo Abu Dhabi", "Nat Geo Abu Dhabi | ناشيونال جيوغرافيك"),
    ("National Geographic", "National Geographic"),
    ("Bein Sports", "beIN Sports"),
    ("Bein Sports News", "beIN Sports News | بي إن سبورت الإخبارية"),
    ("Alkass", "Alkass | الكأس"),
    ("Abu Dhabi Sports", "Abu Dhabi Sports | أبوظبي الرياضية"),
    ("Dubai Sports", "Dubai Sports | دبي الرياضية"),
    ("SSC", "SSC | الرياضية السعودية"),
    ("KSA Sports", "KSA Sports | السعودية الرياضية"),
    ("On Time Sports", "On Time Sports | أون تايم سبورت"),
    ("Sharjah Sports", "Sharjah Sports | الشارقة الرياضية"),
    ("Yas Sports", "Yas Sports | ياس"),
    ("Zaman", "Zaman | زمان"),
    ("Thikrayat", "Thikrayat | ذكريات"),
    ("Quran", "Quran | القرآن الكريم"),
    ("Sunnah", "Sunnah | السنة النبوية"),
    ("Iqraa", "Iqraa | اقرأ"),
    ("Al Resalah", "Al Resalah | الرسالة"),
    ("Majid", "Majid | ماجد"),
];

/// Matched case-sensitively against name and group.
pub const EXCLUDED_KEYWORDS: &[&str] = &[
    "Rotana", "Fann", "Watar", "Radio", "Audio", "FM", "Test", "Iran", "Persian", "Al Alam",
];

/// Matched case-insensitively against the name; lets a genre-feed channel
/// past the country gate.
pub const FORCE_INCLUDE: &[&str] = &[
    "Maraya", "Tash", "Comedy", "Classic", "Zaman", "Drama", "Spacetoon", "MBC", "Cartoon",
];

/// Matched against the lowercased tvg-id.
pub const BLOCKED_REGIONS: &[&str] = &[
    ".ir", ".cn", ".ru", ".in", ".pk", ".tr", ".vn", ".th", ".kr", ".jp", ".br", ".es", ".fr",
    ".it", ".de", ".pl", ".ua", ".id", ".il", ".et", ".er", ".so",
];

/// A name containing the first string is dropped unless it also contains the
/// second.
pub const CONDITIONAL_KEEP: (&str, &str) = ("Al Iraqia", "News");

/// Genre feeds, fetched in this order after the curated channels.
pub const GENRE_FEEDS: &[&str] = &[
    "news",
    "kids",
    "animation",
    "sports",
    "comedy",
    "classic",
    "documentary",
    "movies",
    "series",
    "family",
    "lifestyle",
    "auto",
    "business",
    "religious",
    "education",
];

/// Heuristic genre keywords, tried in order against the lowercased group and
/// name when a channel carries no category of its own.
pub const GENRE_KEYWORDS: &[(&str, &[&str])] = &[
    ("sports", &["sport", "alkass", "ssc"]),
    ("movies", &["movie", "cinema", "film", "aflam"]),
    ("news", &["news", "akhbar"]),
    ("kids", &["kids", "cartoon", "spacetoon", "animation", "majid"]),
    ("religious", &["religious", "quran", "islam", "sunnah", "iqraa"]),
    ("documentary", &["documentary", "education", "science", "nat geo", "geographic"]),
];

pub const FALLBACK_CATEGORY: &str = "general";

pub const PLAYLIST_HEADER: &str = "#EXTM3U";

pub fn country_label(code: &str) -> Option<&'static str> {
    COUNTRY_LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

pub fn category_label(id: &str) -> Option<&'static str> {
    CATEGORY_LABELS
        .iter()
        .find(|(c, _)| *c == id)
        .map(|(_, label)| *label)
}

pub fn is_target_country(code: &str) -> bool {
    TARGET_COUNTRIES.contains(&code)
}

/// Labels that sort first, in this order; everything else follows
/// alphabetically.
pub fn priority_labels() -> Vec<&'static str> {
    const GENRES: &[&str] = &[
        "premium",
        "sports",
        "news",
        "movies",
        "series",
        "kids",
        "documentary",
        "religious",
        "general",
    ];
    const COUNTRIES: &[&str] = &["sa", "ae", "eg", "kw", "iq"];

    GENRES
        .iter()
        .filter_map(|id| category_label(id))
        .chain(COUNTRIES.iter().filter_map(|code| country_label(code)))
        .collect()
}

/// Hand-picked streams merged in after the language feed.
pub fn curated_channels() -> Vec<Channel> {
    let sharjah_quran = |url: &str| Channel {
        url: url.to_string(),
        name: "Sharjah Quran TV".to_string(),
        logo: "https://i.imgur.com/Gkx79Bq.png".to_string(),
        group: "Religious".to_string(),
        id: "SharjahQuran.ae".to_string(),
        is_arab: true,
        country: Some("ae".to_string()),
        category_id: Some("religious".to_string()),
    };

    vec![
        sharjah_quran("https://ythls.armelin.one/channel/UCn8lMRYDANs_1yAL3iuw7_g.m3u8"),
        sharjah_quran(
            "https://linkastream.co/headless?url=https://youtube.com/channel/UCn8lMRYDANs_1yAL3iuw7_g/live",
        ),
    ]
}
