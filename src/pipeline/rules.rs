//! Keyword-driven classification rules.
//!
//! The decision procedure is an ordered list of named rules over a set of
//! signals computed in one pass: keyword-set hit counts plus three boolean
//! markers (trusted sender, newsletter, marketing). The first rule whose
//! predicate holds decides the category; the list ends with a catch-all, so
//! classification is total.
//!
//! Matching is plain substring containment over the lower-cased snippet and
//! subject — a keyword matches even inside a larger word. The sender is
//! scanned only against the trusted-domain list, never for keywords, so a
//! domain quoted in a signature cannot count as a content match.

use crate::pipeline::types::Category;

// ── Static rule tables ──────────────────────────────────────────────

/// Senders containing any of these substrings are treated as trusted.
///
/// Deliberately a coarse substring check, not a parsed-domain check:
/// `security@paypal.com.evil.example` passes. Spoof resistance is out of
/// scope for this engine.
pub static TRUSTED_DOMAINS: &[&str] = &[
    "google.com",
    "microsoft.com",
    "apple.com",
    "amazon.com",
    "paypal.com",
    "github.com",
    "gitlab.com",
    "linkedin.com",
    "facebook.com",
    "twitter.com",
    "instagram.com",
    "netflix.com",
    "dropbox.com",
    "slack.com",
    "zoom.us",
    "adobe.com",
    "salesforce.com",
    "stripe.com",
    "atlassian.com",
    "notion.so",
];

static URGENT_SECURITY: &[&str] = &[
    "security alert",
    "security warning",
    "suspicious activity",
    "unusual activity",
    "unauthorized access",
    "unusual sign-in",
    "new login",
    "login from",
    "verify your account",
    "confirm your identity",
    "account verification required",
    "password reset required",
    "password changed",
    "password reset",
    "suspicious login",
    "login attempt",
    "failed login",
    "unusual location",
    "verification code",
    "two-factor",
    "2fa",
    "authentication code",
    "account locked",
    "account disabled",
    "account compromised",
    "data breach",
    "security incident",
    "fraud alert",
];

static URGENT_FINANCIAL: &[&str] = &[
    "payment failed",
    "payment declined",
    "card declined",
    "transaction failed",
    "payment overdue",
    "subscription cancelled",
    "subscription ending",
    "account suspended",
    "service suspended",
    "outstanding balance",
    "invoice overdue",
    "payment bounced",
    "insufficient funds",
    "billing issue",
    "payment issue",
    "auto-pay failed",
    "final notice",
    "last warning",
    "account will be closed",
];

static URGENT_ACTION: &[&str] = &[
    "action required",
    "immediate action",
    "respond immediately",
    "urgent",
    "asap",
    "time sensitive",
    "time-sensitive",
    "expires today",
    "expiring soon",
    "deadline today",
    "critical",
    "emergency",
    "important notice",
    "requires immediate attention",
    "needs your attention",
];

static URGENT_LEGAL: &[&str] = &[
    "legal notice",
    "court notice",
    "legal action",
    "lawsuit",
    "violation",
    "compliance required",
    "regulatory notice",
    "tax notice",
    "irs notice",
];

static IMPORTANT_WORK: &[&str] = &[
    "meeting request",
    "meeting invite",
    "calendar invitation",
    "schedule",
    "appointment",
    "interview",
    "call scheduled",
    "project update",
    "status update",
    "progress report",
    "review required",
    "approval needed",
    "please review",
    "feedback requested",
    "input needed",
    "action needed",
    "task assigned",
    "assigned to you",
    "deadline",
    "proposal",
    "contract",
    "agreement",
    "document to sign",
    "performance review",
    "annual review",
    "1:1 meeting",
];

static IMPORTANT_PERSONAL: &[&str] = &[
    "order confirmation",
    "order shipped",
    "delivery update",
    "tracking information",
    "package delivered",
    "out for delivery",
    "booking confirmation",
    "reservation confirmed",
    "ticket",
    "appointment reminder",
    "reservation reminder",
    "invoice",
    "receipt",
    "payment confirmation",
    "subscription renewal",
    "membership renewal",
    "password reset",
    "verification email",
    "confirm email",
];

static IMPORTANT_UPDATES: &[&str] = &[
    "new message",
    "direct message",
    "you have been mentioned",
    "comment on",
    "replied to",
    "new comment",
    "new reply",
    "shared with you",
    "invited you",
    "added you",
    "requested to",
    "wants to",
    "sent you",
    "notification from",
    "update from",
    "news from",
];

static SPAM_OBVIOUS: &[&str] = &[
    "congratulations you won",
    "you won",
    "claim your prize",
    "winner",
    "you've been selected",
    "selected winner",
    "lucky winner",
    "click here now",
    "click below",
    "click this link",
    "act now",
    "order now",
    "buy now",
    "shop now",
    "make money fast",
    "make $$",
    "earn money",
    "work from home",
    "lose weight fast",
    "weight loss miracle",
    "diet pill",
    "viagra",
    "cialis",
    "pharmacy",
    "prescription",
    "casino",
    "lottery",
    "gambling",
    "poker",
    "risk free",
    "100% free",
    "absolutely free",
    "no credit check",
    "no strings attached",
    "billion dollars",
    "million dollars",
    "inheritance",
    "nigerian prince",
    "transfer funds",
    "bank transfer",
];

static SPAM_MARKETING: &[&str] = &[
    "limited time offer",
    "offer expires",
    "today only",
    "don't miss out",
    "last chance",
    "hurry up",
    "exclusive deal",
    "special offer",
    "amazing deal",
    "lowest price",
    "best price",
    "price drop",
    "sale ends",
    "flash sale",
    "clearance sale",
    "up to % off",
    "% discount",
    "save up to",
    "free trial",
    "try for free",
    "no obligation",
];

static PROMOTIONAL: &[&str] = &[
    "newsletter",
    "weekly digest",
    "monthly update",
    "new arrivals",
    "latest collection",
    "new products",
    "recommendations for you",
    "you might like",
    "based on your",
    "personalized for you",
    "trending now",
    "popular items",
    "best sellers",
    "unsubscribe",
    "manage preferences",
    "email preferences",
];

static NEWSLETTER_MARKERS: &[&str] = &["newsletter", "digest", "weekly roundup", "unsubscribe"];

static MARKETING_MARKERS: &[&str] = &["shop", "sale", "discount", "deal", "offer"];

// ── Signals ─────────────────────────────────────────────────────────

/// Everything the decision rules look at, computed in one pass over the
/// lower-cased combined text and sender.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Signals {
    /// Sender contains a trusted-domain substring.
    pub is_trusted: bool,
    /// Combined text carries newsletter markers.
    pub is_newsletter: bool,
    /// Combined text carries marketing markers.
    pub is_marketing: bool,
    pub urgent_security: usize,
    pub urgent_financial: usize,
    pub urgent_action: usize,
    pub urgent_legal: usize,
    pub spam_obvious: usize,
    pub spam_marketing: usize,
    pub important_work: usize,
    pub important_personal: usize,
    pub important_updates: usize,
    pub promotional: usize,
}

impl Signals {
    /// Scan lower-cased inputs. `combined` is snippet + " " + subject; the
    /// sender is checked against the trusted list only.
    pub fn scan(combined: &str, sender: &str) -> Self {
        Self {
            is_trusted: TRUSTED_DOMAINS.iter().any(|d| sender.contains(d)),
            is_newsletter: NEWSLETTER_MARKERS.iter().any(|m| combined.contains(m)),
            is_marketing: MARKETING_MARKERS.iter().any(|m| combined.contains(m)),
            urgent_security: count_matches(URGENT_SECURITY, combined),
            urgent_financial: count_matches(URGENT_FINANCIAL, combined),
            urgent_action: count_matches(URGENT_ACTION, combined),
            urgent_legal: count_matches(URGENT_LEGAL, combined),
            spam_obvious: count_matches(SPAM_OBVIOUS, combined),
            spam_marketing: count_matches(SPAM_MARKETING, combined),
            important_work: count_matches(IMPORTANT_WORK, combined),
            important_personal: count_matches(IMPORTANT_PERSONAL, combined),
            important_updates: count_matches(IMPORTANT_UPDATES, combined),
            promotional: count_matches(PROMOTIONAL, combined),
        }
    }
}

/// Number of distinct keywords from `set` present in `text`. Repeats of the
/// same keyword count once.
fn count_matches(set: &[&str], text: &str) -> usize {
    set.iter().filter(|keyword| text.contains(*keyword)).count()
}

// ── Decision procedure ──────────────────────────────────────────────

/// A single decision rule: a named predicate over the signals.
struct DecisionRule {
    name: &'static str,
    category: Category,
    applies: fn(&Signals) -> bool,
}

/// Ordered decision list. First match wins; no rule is re-evaluated after a
/// decision, and the trailing catch-all always applies.
static DECISION_RULES: &[DecisionRule] = &[
    DecisionRule {
        name: "security-or-legal",
        category: Category::Urgent,
        applies: |s| s.urgent_security >= 1 || s.urgent_legal >= 1,
    },
    DecisionRule {
        name: "trusted-financial",
        category: Category::Urgent,
        applies: |s| s.urgent_financial >= 1 && s.is_trusted,
    },
    DecisionRule {
        name: "action-required",
        category: Category::Urgent,
        applies: |s| s.urgent_action >= 1 && !s.is_marketing,
    },
    DecisionRule {
        name: "obvious-spam",
        category: Category::Other,
        applies: |s| s.spam_obvious >= 2,
    },
    DecisionRule {
        name: "untrusted-marketing-blast",
        category: Category::Other,
        applies: |s| !s.is_trusted && s.spam_marketing >= 3,
    },
    DecisionRule {
        name: "work",
        category: Category::Important,
        applies: |s| s.important_work >= 1 && !s.is_newsletter,
    },
    DecisionRule {
        name: "trusted-personal",
        category: Category::Important,
        applies: |s| s.important_personal >= 1 && s.is_trusted,
    },
    DecisionRule {
        name: "social-updates",
        category: Category::Important,
        applies: |s| s.important_updates >= 1 && !s.is_marketing,
    },
    DecisionRule {
        name: "bulk-promotional",
        category: Category::Other,
        applies: |s| s.is_newsletter || s.promotional >= 2 || s.is_marketing,
    },
    DecisionRule {
        name: "trusted-default",
        category: Category::Important,
        applies: |s| s.is_trusted && !s.is_marketing,
    },
    DecisionRule {
        name: "fallback",
        category: Category::Other,
        applies: |_| true,
    },
];

/// Classify a message into exactly one category.
///
/// `None` degrades to the empty string. Never fails or panics — the decision
/// list ends with a catch-all.
pub fn classify(snippet: Option<&str>, sender: Option<&str>, subject: Option<&str>) -> Category {
    classify_detailed(snippet, sender, subject).0
}

/// Classify a message, reporting which rule decided it.
///
/// The rule name is stable and intended for logging and tests that need to
/// distinguish same-label outcomes decided by different rules.
pub fn classify_detailed(
    snippet: Option<&str>,
    sender: Option<&str>,
    subject: Option<&str>,
) -> (Category, &'static str) {
    let snippet = snippet.unwrap_or_default().to_lowercase();
    let sender = sender.unwrap_or_default().to_lowercase();
    let subject = subject.unwrap_or_default().to_lowercase();

    let combined = format!("{snippet} {subject}");
    let signals = Signals::scan(&combined, &sender);
    decide(&signals)
}

/// Apply the ordered decision list to precomputed signals.
pub fn decide(signals: &Signals) -> (Category, &'static str) {
    let rule = DECISION_RULES
        .iter()
        .find(|rule| (rule.applies)(signals))
        .expect("decision list ends with a catch-all rule");
    (rule.category, rule.name)
}
