//! Phrase pools used by the answer engine and the home page.

/// Questions that count as asking for the meaning of life.
pub const MEANING_OF_LIFE: &[&str] = &[
    "what is the meaning of life",
    "meaning of life",
    "what is life about",
    "why do we exist",
    "what is the world about",
    "why were we born",
    "purpose of life",
    "why are we here",
    "what's life all about",
    "purpose of existence",
];

pub const GREETINGS: &[&str] = &[
    "Hallo! Wie kann ich Ihnen heute weiterhelfen?",
    "Hi! Was kann ich für Sie tun?",
    "Guten Tag! Wie darf ich Ihnen behilflich sein?",
];

pub const ASK_GENDER: &[&str] = &[
    "Bitte geben Sie Ihr Geschlecht ein (male/female)",
    "Könnten Sie mir bitte Ihr Geschlecht mitteilen (male/female)?",
    "Teilen Sie mir bitte Ihr Geschlecht mit (male/female)",
];

pub const ANSWER_FEMALE: &[&str] = &[
    "The meaning of life is 41.",
    "Für Frauen: Das Leben bedeutet 41.",
    "Ihre Antwort lautet: 41.",
];

pub const ANSWER_MALE: &[&str] = &[
    "The meaning of life is 42.",
    "Für Männer: Das Leben bedeutet 42.",
    "Ihre Antwort lautet: 42.",
];

pub const UNKNOWN: &[&str] = &[
    "Ich konnte die Antwort leider nicht ermitteln.",
    "Leider habe ich keine passende Antwort gefunden.",
    "Entschuldigung, aber ich weiß nicht, wie ich darauf antworten soll.",
];

pub const REQUEST_ERROR: &[&str] = &[
    "Es gab einen Fehler bei der Anfrage.",
    "Leider ist ein Fehler aufgetreten.",
    "Da ist etwas schiefgelaufen.",
];
