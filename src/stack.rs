#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    pub proficiency: u8,
    pub icon: &'static str,
    pub category: &'static str,
}

const fn tech(
    name: &'static str,
    proficiency: u8,
    icon: &'static str,
    category: &'static str,
) -> Technology {
    Technology {
        name,
        proficiency,
        icon,
        category,
    }
}

pub static TECHNOLOGIES: &[Technology] = &[
    tech("React", 95, "⚛️", "Frontend"),
    tech("TypeScript", 90, "📘", "Language"),
    tech("Node.js", 88, "🟢", "Backend"),
    tech("Python", 85, "🐍", "Language"),
    tech("Next.js", 92, "▲", "Framework"),
    tech("Tailwind CSS", 95, "🎨", "Styling"),
    tech("PostgreSQL", 80, "🐘", "Database"),
    tech("MongoDB", 85, "🍃", "Database"),
    tech("AWS", 75, "☁️", "Cloud"),
    tech("Docker", 82, "🐳", "DevOps"),
    tech("Git", 90, "📦", "Tools"),
    tech("GraphQL", 78, "◈", "API"),
];

/// Unique categories in order of first appearance.
pub fn categories(techs: &[Technology]) -> Vec<&'static str> {
    let mut out = Vec::new();
    for t in techs {
        if !out.contains(&t.category) {
            out.push(t.category);
        }
    }
    out
}

/// Dash offset for an SVG progress ring of radius `r` at `proficiency` percent.
pub fn ring_offset(r: f64, proficiency: u8) -> f64 {
    let circumference = 2.0 * std::f64::consts::PI * r;
    circumference * (1.0 - f64::from(proficiency.min(100)) / 100.0)
}
