//! Named emoji catalog backing the profile/title image picker.

/// Image used until the user picks one
pub const DEFAULT_TITLE_IMAGE: &str = "SmilingFaceWithSunglasses";

pub const FACE_EMOJIS: &[(&str, &str)] = &[
    ("GrinningFace", "😀"),
    ("SmilingFaceWithSmilingEyes", "😊"),
    ("SmilingFaceWithSunglasses", "😎"),
    ("SmilingFaceWithHearts", "🥰"),
    ("FaceWithTearsOfJoy", "😂"),
    ("WinkingFace", "😉"),
    ("ThinkingFace", "🤔"),
    ("StarStruck", "🤩"),
    ("SleepyFace", "😪"),
    ("PartyingFace", "🥳"),
    ("NerdFace", "🤓"),
    ("FaceWithMonocle", "🧐"),
];

pub const OBJECT_EMOJIS: &[(&str, &str)] = &[
    ("Calendar", "📅"),
    ("Memo", "📝"),
    ("Books", "📚"),
    ("Laptop", "💻"),
    ("AlarmClock", "⏰"),
    ("Rocket", "🚀"),
    ("LightBulb", "💡"),
    ("Target", "🎯"),
    ("Trophy", "🏆"),
    ("Seedling", "🌱"),
    ("Coffee", "☕"),
    ("Pushpin", "📌"),
];

/// Every named emoji, faces first, in catalog order
pub fn all() -> impl Iterator<Item = (&'static str, &'static str)> {
    FACE_EMOJIS.iter().chain(OBJECT_EMOJIS.iter()).copied()
}

pub fn lookup(name: &str) -> Option<&'static str> {
    all().find(|(n, _)| *n == name).map(|(_, glyph)| glyph)
}

/// Case-insensitive substring search over emoji names, in catalog order.
/// An empty query clears the result list rather than matching everything.
pub fn search(query: &str) -> Vec<&'static str> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    all()
        .filter(|(name, _)| name.to_lowercase().contains(&needle))
        .map(|(name, _)| name)
        .collect()
}
