//! Built-in lexicon profiles
//!
//! Trigger words are lowercase lemmas or common inflected forms. The toolkit
//! lemmatiser is seeded with these words, so listing a base form is enough
//! for its regular inflections to match.

use super::LexiconBuilder;
use super::LexiconStore;

pub const INTENSIFIERS: &[&str] = &[
    "very",
    "really",
    "extremely",
    "absolutely",
    "so",
    "totally",
    "incredibly",
    "truly",
    "completely",
    "utterly",
    "deeply",
    "highly",
    "super",
    "especially",
    "particularly",
    "exceptionally",
    "remarkably",
    "too",
    "most",
    "quite",
];

pub const DIMINISHERS: &[&str] = &[
    "slightly",
    "somewhat",
    "barely",
    "hardly",
    "mildly",
    "partly",
    "fairly",
    "rather",
    "marginally",
    "scarcely",
    "little",
    "kinda",
    "sorta",
];

pub const NEGATIONS: &[&str] = &[
    "not", "n't", "no", "never", "none", "nobody", "nothing", "neither", "nor", "nowhere",
    "cannot", "without",
];

pub const CONDITIONALS: &[&str] = &[
    "if",
    "unless",
    "whether",
    "would",
    "could",
    "might",
    "may",
    "should",
    "suppose",
    "assuming",
    "because",
    "since",
    "hypothetically",
    "perhaps",
    "maybe",
];

/// Prefix-negated forms of joy, sadness, anger and fear triggers
pub const CORE_NEGATED_FORMS: &[(&str, &str)] = &[
    ("unhappy", "happy"),
    ("displeased", "pleased"),
    ("unexcited", "excited"),
    ("unafraid", "afraid"),
    ("unworried", "worried"),
];

/// Prefix-negated forms across the twelve extended categories
pub const EXTENDED_NEGATED_FORMS: &[(&str, &str)] = &[
    ("distrust", "trust"),
    ("unreliable", "reliable"),
    ("dishonest", "honest"),
    ("disloyal", "loyal"),
    ("unsafe", "safe"),
    ("insecure", "secure"),
    ("unsurprised", "surprised"),
    ("uncaring", "caring"),
    ("ungrateful", "grateful"),
    ("unthankful", "thankful"),
    ("dishonored", "honored"),
    ("unashamed", "ashamed"),
];

const JOY: &[&str] = &[
    "happy", "happiness", "joy", "joyful", "glad", "delighted", "delight", "thrilled", "thrill",
    "overjoyed", "cheerful", "excited", "ecstatic", "pleased", "elated", "wonderful", "smile",
    "laugh", "fun", "enjoy", "celebrate", "jubilant", "blissful", "bliss",
];

const SADNESS: &[&str] = &[
    "sad",
    "sadness",
    "depressed",
    "miserable",
    "sorrow",
    "grief",
    "grieve",
    "cry",
    "heartbroken",
    "gloomy",
    "lonely",
    "disappointed",
    "disappointment",
    "despair",
    "melancholy",
    "upset",
    "mourn",
    "hopeless",
    "regret",
];

const ANGER: &[&str] = &[
    "angry",
    "anger",
    "furious",
    "fury",
    "outraged",
    "outrage",
    "rage",
    "mad",
    "irritated",
    "annoyed",
    "annoy",
    "hate",
    "hatred",
    "hostile",
    "resent",
    "resentment",
    "frustrated",
    "frustration",
    "betrayal",
    "betray",
    "livid",
    "infuriated",
    "infuriate",
];

const FEAR: &[&str] = &[
    "afraid",
    "fear",
    "scared",
    "scare",
    "frightened",
    "frighten",
    "terrified",
    "terrify",
    "anxious",
    "anxiety",
    "worried",
    "worry",
    "nervous",
    "panic",
    "dread",
    "horrified",
    "alarmed",
    "uneasy",
    "tense",
];

const TRUST: &[&str] = &[
    "trust",
    "reliable",
    "faith",
    "believe",
    "loyal",
    "honest",
    "dependable",
    "safe",
    "secure",
    "rely",
    "assured",
];

const SURPRISE: &[&str] = &[
    "surprised",
    "surprise",
    "amazed",
    "amaze",
    "astonished",
    "astonish",
    "shocked",
    "shock",
    "stunned",
    "startled",
    "unexpected",
    "wow",
    "astounded",
];

const DISGUST: &[&str] = &[
    "disgust",
    "disgusted",
    "disgusting",
    "gross",
    "revolting",
    "repulsive",
    "nasty",
    "vile",
    "sickening",
    "loathe",
    "yuck",
    "repulsed",
    "distaste",
];

const ANTICIPATION: &[&str] = &[
    "anticipate",
    "anticipation",
    "eager",
    "expect",
    "await",
    "hope",
    "hopeful",
    "impatient",
    "curious",
    "longing",
];

const LOVE: &[&str] = &[
    "love",
    "adore",
    "affection",
    "cherish",
    "fond",
    "darling",
    "romantic",
    "passion",
    "passionate",
    "caring",
    "tender",
    "devoted",
];

const GRATITUDE: &[&str] = &[
    "grateful",
    "gratitude",
    "thankful",
    "thanks",
    "thank",
    "appreciate",
    "appreciation",
    "appreciative",
    "blessed",
    "indebted",
];

const PRIDE: &[&str] = &[
    "proud",
    "pride",
    "accomplished",
    "accomplishment",
    "triumph",
    "triumphant",
    "achievement",
    "dignity",
    "honored",
    "honoured",
    "confident",
];

const SHAME: &[&str] = &[
    "ashamed",
    "shame",
    "embarrassed",
    "embarrass",
    "embarrassment",
    "humiliated",
    "humiliate",
    "humiliation",
    "guilty",
    "guilt",
    "mortified",
    "disgrace",
];

fn with_shared_words(builder: LexiconBuilder) -> LexiconBuilder {
    builder
        .intensifiers(INTENSIFIERS)
        .diminishers(DIMINISHERS)
        .negations(NEGATIONS)
        .conditionals(CONDITIONALS)
}

/// Four-category profile
pub fn core() -> LexiconBuilder {
    with_shared_words(
        LexiconStore::builder()
            .category("joy", "😊", "Happiness, delight and contentment", JOY)
            .category("sadness", "😢", "Sorrow, grief and disappointment", SADNESS)
            .category("anger", "😠", "Irritation, hostility and rage", ANGER)
            .category("fear", "😨", "Worry, anxiety and dread", FEAR),
    )
    .negated_forms(CORE_NEGATED_FORMS)
    .opposite("joy", "sadness")
    .opposite("anger", "fear")
}

/// Twelve-category profile: Plutchik's wheel plus four social emotions
pub fn extended() -> LexiconBuilder {
    with_shared_words(
        LexiconStore::builder()
            .category("joy", "😊", "Happiness, delight and contentment", JOY)
            .category("trust", "🤝", "Confidence in and reliance on others", TRUST)
            .category("fear", "😨", "Worry, anxiety and dread", FEAR)
            .category("surprise", "😲", "Astonishment at the unexpected", SURPRISE)
            .category("sadness", "😢", "Sorrow, grief and disappointment", SADNESS)
            .category("disgust", "🤢", "Revulsion and strong disapproval", DISGUST)
            .category("anger", "😠", "Irritation, hostility and rage", ANGER)
            .category("anticipation", "⏳", "Eagerness about what is coming", ANTICIPATION)
            .category("love", "❤️", "Affection, warmth and attachment", LOVE)
            .category("gratitude", "🙏", "Thankfulness and appreciation", GRATITUDE)
            .category("pride", "🦁", "Satisfaction in achievement", PRIDE)
            .category("shame", "😳", "Embarrassment, guilt and humiliation", SHAME),
    )
    .negated_forms(CORE_NEGATED_FORMS)
    .negated_forms(EXTENDED_NEGATED_FORMS)
    .opposite("joy", "sadness")
    .opposite("trust", "disgust")
    .opposite("anger", "fear")
    .opposite("surprise", "anticipation")
    .opposite("pride", "shame")
}
