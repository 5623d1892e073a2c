//! Fixed reference lists the generator draws from.

use rand::Rng;

/// Session topics. The generator cycles this list, so its length fixes
/// the variety of titles but not the session count.
pub static SESSION_TOPICS: &[&str] = &[
    "The Future of AI in Production",
    "Scaling Distributed Systems",
    "Zero-Trust Security Architecture",
    "Observability Beyond Dashboards",
    "Developer Experience at Scale",
    "Event-Driven Architecture Patterns",
    "Machine Learning Operations",
    "Cloud Cost Engineering",
    "API Design for the Long Run",
    "Resilience Engineering in Practice",
    "Data Mesh and Ownership",
    "Platform Teams Done Right",
    "WebAssembly on the Server",
    "Privacy Engineering Fundamentals",
    "From Monolith to Modules",
];

pub static ROOMS: &[&str] = &[
    "Main Hall",
    "Summit Room",
    "Track A",
    "Track B",
    "Workshop Lab",
    "Fireside Stage",
];

pub static TAGS: &[&str] = &[
    "ai",
    "architecture",
    "security",
    "devops",
    "data",
    "cloud",
    "leadership",
    "performance",
    "frontend",
    "platform",
];

/// One speaker is generated per entry; the list length is the speaker count.
pub static SPEAKER_NAMES: &[&str] = &[
    "Sarah Chen",
    "Marcus Webb",
    "Priya Patel",
    "James O'Connor",
    "Yuki Tanaka",
    "Elena Rodriguez",
    "David Kim",
    "Amara Okafor",
    "Lars Nielsen",
    "Fatima Al-Rashid",
    "Tom Baker",
    "Ingrid Svensson",
    "Carlos Mendoza",
    "Nadia Petrov",
    "Raj Malhotra",
];

pub static SPEAKER_TITLES: &[&str] = &[
    "Principal Engineer",
    "CTO",
    "Staff Engineer",
    "VP of Engineering",
    "Head of Platform",
    "Distinguished Engineer",
    "Engineering Manager",
    "Research Scientist",
];

pub static COMPANIES: &[&str] = &[
    "Nimbus Labs",
    "Vertex Systems",
    "Orbital Software",
    "Quanta Cloud",
    "Beacon Analytics",
    "Halcyon Tech",
    "Driftwood Data",
    "Polaris Digital",
];

pub static ATTENDEE_ROLES: &[&str] = &[
    "Software Engineer",
    "Engineering Manager",
    "Product Manager",
    "Data Scientist",
    "SRE",
    "Designer",
    "Architect",
    "Consultant",
];

pub static GIVEN_NAMES: &[&str] = &[
    "James",
    "Mary",
    "Robert",
    "Linda",
    "Michael",
    "Elizabeth",
    "Wei",
    "Yuki",
    "Aisha",
    "Pavel",
    "Ingrid",
    "Carlos",
    "Fatima",
    "Kenji",
    "Olga",
    "Raj",
    "Amara",
    "Elena",
    "Hassan",
    "Priya",
    "Sven",
    "Ming",
    "Omar",
    "Diego",
    "Nadia",
    "Leila",
    "Zara",
    "Luna",
    "Felix",
    "Sage",
];

pub static FAMILY_NAMES: &[&str] = &[
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Garcia",
    "Miller",
    "Chen",
    "Tanaka",
    "Patel",
    "Kim",
    "Nguyen",
    "Ali",
    "Novak",
    "Silva",
    "Kowalski",
    "Andersson",
    "Okafor",
    "Petrov",
    "Haddad",
    "Yamamoto",
];

/// Comment bodies for generated feedback. `{title}` is replaced with the
/// session title.
pub static COMMENT_TEMPLATES: &[&str] = &[
    "Really enjoyed {title} - great pacing and clear examples.",
    "{title} was packed with practical takeaways.",
    "Solid session, though {title} could have used more Q&A time.",
    "The speaker made {title} approachable even for newcomers.",
    "Loved the live demos in {title}.",
    "{title} went deep fast - exactly what I hoped for.",
    "Good content in {title}, the room was a bit crowded though.",
    "Would attend a follow-up to {title} in a heartbeat.",
];

/// Compose a random attendee full name.
pub fn generate_person_name(rng: &mut impl Rng) -> String {
    let given = GIVEN_NAMES[rng.gen_range(0..GIVEN_NAMES.len())];
    let family = FAMILY_NAMES[rng.gen_range(0..FAMILY_NAMES.len())];
    format!("{given} {family}")
}

/// Fill a comment template with the session title.
pub fn generate_comment(title: &str, rng: &mut impl Rng) -> String {
    let template = COMMENT_TEMPLATES[rng.gen_range(0..COMMENT_TEMPLATES.len())];
    template.replace("{title}", title)
}
