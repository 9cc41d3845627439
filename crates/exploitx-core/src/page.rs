//! Static event page content.

use chrono::Datelike;

pub const EVENT_NAME: &str = "ExploitX";
pub const TAGLINE: &str = "Bootcamp & CTF (Capture The Flag): a perfect blend of hands-on training \
     and thrilling cybersecurity challenges!";
pub const ORGANIZER: &str = "INDIAN SOCIETY FOR TECHNICAL EDUCATION";
pub const CHAPTER: &str = "HIT STUDENTS' CHAPTER";
pub const ORGANIZER_FULL: &str = "Haldia Institute of Technology Students' Chapter";
pub const QUERY_EMAIL: &str = "istehitsc@example.com";

/// One row of the event schedule.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleItem {
    pub label: &'static str,
    pub lines: &'static [&'static str],
}

pub const SCHEDULE: &[ScheduleItem] = &[
    ScheduleItem {
        label: "Main Event",
        lines: &["5th - 7th May"],
    },
    ScheduleItem {
        label: "Time",
        lines: &["4:30 PM onwards"],
    },
    ScheduleItem {
        label: "Location",
        lines: &["CSE-CS, 3rd floor"],
    },
    ScheduleItem {
        label: "Online Introduction Classes",
        lines: &["2nd - 4th May", "7:30 PM onwards"],
    },
];

pub const RULES: &[&str] = &[
    "All participants must register before the event starts.",
    "Attacking the CTF infrastructure is strictly prohibited.",
    "The format of the flag to be discovered is: ISTEHITSC{flag...}.",
    "Sharing flags or solutions during the competition is not allowed.",
    "The organizing team decision is final in case of any disputes.",
    "Participants must bring their own laptops with necessary software installed.",
    "Participants should maintain ethical conduct throughout the event.",
];

/// Index of the rule rendered with emphasis (the flag format).
pub const HIGHLIGHTED_RULE: usize = 2;

pub const GUIDELINES: &[&str] = &[
    "Arrive at least 15 minutes before the event starts for registration verification.",
    "Basic knowledge of Linux commands, networking, and web technologies is recommended.",
    "Take regular breaks and stay hydrated during the event.",
    "Ask volunteers for help if you are completely stuck on a challenge.",
];

#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub name: &'static str,
    pub year: &'static str,
    pub phone: &'static str,
}

pub const CONTACTS: &[Contact] = &[
    Contact {
        name: "Kunal Rajnish",
        year: "4th year",
        phone: "6204003785",
    },
    Contact {
        name: "Aayush Dutta",
        year: "4th year",
        phone: "7044139147",
    },
    Contact {
        name: "Pranav Aditya",
        year: "4th year",
        phone: "6206825782",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "iste.hit.sc",
        url: "https://instagram.com/iste.hit.sc",
    },
    SocialLink {
        label: "iste-hit-sc",
        url: "https://linkedin.com/company/iste-hit-sc",
    },
];

/// Footer copyright line for the current year.
pub fn copyright_line() -> String {
    copyright_line_for(chrono::Local::now().year())
}

pub fn copyright_line_for(year: i32) -> String {
    format!("© {year} ISTE HIT Students' Chapter. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FLAG_PREFIX;

    #[test]
    fn test_highlighted_rule_is_flag_format() {
        assert!(RULES[HIGHLIGHTED_RULE].contains(FLAG_PREFIX));
    }

    #[test]
    fn test_copyright_line_for_year() {
        assert_eq!(
            copyright_line_for(2025),
            "© 2025 ISTE HIT Students' Chapter. All rights reserved."
        );
    }
}
