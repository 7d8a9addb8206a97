pub const BRAND: &str = "Easyloans";
pub const TAGLINE: &str = "Fast. Transparent. Trusted.";

pub const HERO_TITLE: &str = "Get the loan you need, in minutes.";
pub const HERO_BODY: &str = "Simple online application, transparent terms, and fast decisions. \
     Use our calculator to estimate monthly payments.";

pub const HIGHLIGHTS: [(&str, &str); 3] = [
    ("3 min", "Avg. approval time"),
    ("Transparent", "No hidden fees"),
    ("Secured", "Bank-level security"),
];

pub const FEATURES: [(&str, &str); 3] = [
    (
        "Personalized terms",
        "Flexible loan options tailored to your income and goals.",
    ),
    (
        "Fast decisions",
        "Automated underwriting for quick approval or pre-qualification.",
    ),
    (
        "Secure",
        "Your data is encrypted and protected with best practices.",
    ),
];

pub const WHY_CHOOSE_US: [&str; 4] = [
    "Fast application and approval process",
    "Competitive interest rates",
    "Clear fees and repayment schedule",
    "Responsive customer support",
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 3] = [
    Faq {
        question: "How long does approval take?",
        answer: "Most applicants get a decision within minutes. Some cases may require \
                 document review, which can take 1-3 business days.",
    },
    Faq {
        question: "What documents do I need?",
        answer: "ID, proof of income, bank statements and address proof may be requested \
                 depending on loan type.",
    },
    Faq {
        question: "Can I prepay?",
        answer: "Yes. Prepayment options vary. Some loans have prepayment penalties; \
                 we'll show exact terms in your offer.",
    },
];

pub const SUPPORT_EMAIL: &str = "easyloans@gmail.com";
pub const SUPPORT_PHONE: &str = "+91 85004 85004";
pub const LEGAL: &str = "Terms · Privacy";
