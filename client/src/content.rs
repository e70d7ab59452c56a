//! Static profile copy rendered by the Home, About, Contact and chrome views.

pub const OWNER_NAME: &str = "Watty Eventice";
pub const OWNER_ROLE: &str = "Frontend Developer";
pub const OWNER_INITIALS: &str = "WE";
pub const CONTACT_EMAIL: &str = "watty.eventice@example.com";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";
pub const CONTACT_PHONE_LINK: &str = "tel:+15551234567";
pub const LOCATION: &str = "San Francisco, CA";
pub const COPYRIGHT_YEAR: u16 = 2024;

pub const HERO_BLURB: &str = "I craft exceptional digital experiences through innovative frontend development. \
Passionate about creating interactive, user-friendly interfaces that bring ideas to life \
with modern technologies and creative problem-solving.";

pub const HERO_IMAGE_URL: &str = "https://images.unsplash.com/photo-1576272531110-2a342fe22342";
pub const PORTRAIT_URL: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=500&h=500&fit=crop&crop=face";

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub glyph: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { name: "GitHub", url: "https://github.com/watty-eventice", glyph: "GH" },
    SocialLink { name: "LinkedIn", url: "https://linkedin.com/in/watty-eventice", glyph: "in" },
    SocialLink { name: "Twitter", url: "https://twitter.com/watty_eventice", glyph: "X" },
];

#[derive(Clone, Copy, Debug)]
pub struct Highlight {
    pub title: &'static str,
    pub caption: &'static str,
}

pub const HERO_HIGHLIGHTS: [Highlight; 3] = [
    Highlight { title: "Clean Code", caption: "Always" },
    Highlight { title: "Fast Performance", caption: "Optimized" },
    Highlight { title: "Modern Tech", caption: "Latest" },
];

#[derive(Clone, Copy, Debug)]
pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: [Value; 4] = [
    Value {
        title: "Purpose-Driven",
        description: "I believe in creating digital solutions that solve real problems and make a meaningful impact on users' lives.",
    },
    Value {
        title: "Passion for Excellence",
        description: "Every line of code I write is crafted with attention to detail, performance, and user experience in mind.",
    },
    Value {
        title: "Collaborative Spirit",
        description: "I thrive in team environments, believing that the best solutions emerge from diverse perspectives and open communication.",
    },
    Value {
        title: "Continuous Learning",
        description: "The tech landscape evolves rapidly, and I'm committed to staying current with the latest tools and best practices.",
    },
];

pub const INTERESTS: [&str; 8] = [
    "UI/UX Design",
    "Web Performance",
    "Accessibility",
    "Open Source",
    "Machine Learning",
    "Photography",
    "Travel",
    "Cooking",
];

pub const STORY: [&str; 3] = [
    "My journey into frontend development began with a simple curiosity about how websites work. \
What started as tweaking MySpace profiles evolved into a deep passion for creating beautiful, \
functional digital experiences.",
    "Over the past 3+ years, I've had the privilege of working with talented teams to build \
applications that serve thousands of users. Each project has taught me something new about \
the art and science of frontend development.",
    "I'm particularly drawn to the intersection of design and technology - finding elegant solutions \
to complex problems while ensuring every user interaction feels intuitive and delightful.",
];

pub const INSPIRATION: [&str; 2] = [
    "When I'm not coding, you can find me exploring new design trends, contributing to open-source \
projects, or experimenting with emerging technologies. I believe that the best developers are \
those who remain curious and never stop learning.",
    "I'm also passionate about mentoring aspiring developers and believe in the power of community \
to elevate everyone's skills and knowledge.",
];

pub const QUICK_FACTS: [(&str, &str); 5] = [
    ("Location", LOCATION),
    ("Specialization", "Frontend Development"),
    ("Preferred Stack", "React + TypeScript"),
    ("Coffee Preference", "Flat White"),
    ("Status", "Open to opportunities"),
];

pub const AVAILABILITY: [&str; 3] = [
    "Open to new projects",
    "Typical response time: 24 hours",
    "Available for both short and long-term projects",
];
