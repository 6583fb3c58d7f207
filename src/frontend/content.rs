use crate::models::{Course, CourseAction, Feature, SocialLink};

pub const SITE_NAME: &str = "Digital SAT Math";
pub const INSTRUCTOR: &str = "Mr. Mohamed Aliaa";

/// External site hosting the recorded lessons.
pub const COURSE_PLATFORM_URL: &str = "https://dsat-math.vercel.app/";

/// Bundled header logo used until one is uploaded.
pub const FALLBACK_LOGO: &str = "/static/images/logo.jpg";

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: "📘",
        title: "Comprehensive Curriculum",
        description: "Complete coverage of all Digital SAT Math topics",
    },
    Feature {
        icon: "📈",
        title: "Proven Methods",
        description: "Strategies that have helped hundreds of students succeed",
    },
    Feature {
        icon: "⏱",
        title: "Flexible Learning",
        description: "Study at your own pace, anytime and anywhere",
    },
];

pub const COURSES: [Course; 2] = [
    Course {
        title: "Private Course",
        description: "Live online sessions with Mr. Mohamed Aliaa: personalized explanations, \
                      interactive problem-solving, and direct feedback designed for your progress.",
        details: "One-on-one attention with customized lesson plans tailored to your learning pace. \
                  Get instant clarification on difficult concepts and receive strategies proven \
                  to boost your score.",
        price: "Starting from $99",
        icon: "👥",
        button_text: "Contact to Enroll",
        action: CourseAction::Internal("/contact"),
    },
    Course {
        title: "Recorded Course",
        description: "Pre-recorded video lessons covering every DSAT Math topic. \
                      Learn anytime, anywhere, at your own speed.",
        details: "Learn all essential DSAT Math strategies with detailed examples and practice \
                  problems. Complete curriculum with step-by-step video explanations and \
                  downloadable resources.",
        price: "Starting from $49",
        icon: "🎬",
        button_text: "Start Learning",
        action: CourseAction::External(COURSE_PLATFORM_URL),
    },
];

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "WhatsApp",
        href: "https://wa.me/",
        icon: "💬",
        accent: "social-whatsapp",
    },
    SocialLink {
        name: "Facebook",
        href: "https://facebook.com/",
        icon: "f",
        accent: "social-facebook",
    },
    SocialLink {
        name: "LinkedIn",
        href: "https://linkedin.com/",
        icon: "in",
        accent: "social-linkedin",
    },
];

pub const LOGO_TIPS: [&str; 4] = [
    "Use a transparent background (PNG format)",
    "Keep dimensions between 200-500px wide",
    "Use high-quality images for sharp display",
    "Logo will appear in the header and home page",
];
