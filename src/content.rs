//! Static page content: projects, skills and the links shown in the hero and footer.

use std::fmt;

pub const LOGO_SRC: &str = "/portfolio-logo.svg";
pub const LOGO_ALT: &str = "Portfolio Logo";
pub const BRAND: &str = "Portfolio";

/// Icons available to the page, drawn inline as 24x24 stroke outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Github,
    Linkedin,
    Mail,
    ExternalLink,
    Code,
    Palette,
    Smartphone,
    Database,
    ChevronDown,
    Menu,
    Close,
    Zap,
    Target,
    ShoppingCart,
    Cloud,
    BarChart,
}

impl Icon {
    pub const ALL: [Icon; 16] = [
        Icon::Github,
        Icon::Linkedin,
        Icon::Mail,
        Icon::ExternalLink,
        Icon::Code,
        Icon::Palette,
        Icon::Smartphone,
        Icon::Database,
        Icon::ChevronDown,
        Icon::Menu,
        Icon::Close,
        Icon::Zap,
        Icon::Target,
        Icon::ShoppingCart,
        Icon::Cloud,
        Icon::BarChart,
    ];

    /// SVG path data in a `0 0 24 24` view box.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Icon::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 0 0 4 2 2 0 1 0 0-4z",
            ],
            Icon::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M22 6l-10 7L2 6",
            ],
            Icon::ExternalLink => &[
                "M15 3h6v6",
                "M10 14L21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
            Icon::Code => &["M16 18l6-6-6-6", "M8 6l-6 6 6 6"],
            Icon::Palette => &[
                "M12 2a10 10 0 0 0 0 20c1.1 0 2-.9 2-2 0-.5-.2-1-.5-1.4-.3-.4-.5-.8-.5-1.3 0-1.1.9-2 2-2h2.3A5.7 5.7 0 0 0 22 9.6C22 5.4 17.5 2 12 2z",
                "M7.5 10.5h.01",
                "M10.5 7.5h.01",
                "M16.5 9.5h.01",
            ],
            Icon::Smartphone => &[
                "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M12 18h.01",
            ],
            Icon::Database => &[
                "M3 5c0-1.66 4-3 9-3s9 1.34 9 3-4 3-9 3-9-1.34-9-3z",
                "M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5",
                "M3 12c0 1.66 4 3 9 3s9-1.34 9-3",
            ],
            Icon::ChevronDown => &["M6 9l6 6 6-6"],
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::Close => &["M18 6L6 18", "M6 6l12 12"],
            Icon::Zap => &["M13 2L3 14h9l-1 8 10-12h-9l1-8z"],
            Icon::Target => &[
                "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z",
                "M12 6a6 6 0 1 0 0 12 6 6 0 1 0 0-12z",
                "M12 10a2 2 0 1 0 0 4 2 2 0 1 0 0-4z",
            ],
            Icon::ShoppingCart => &[
                "M8 21h.01",
                "M19 21h.01",
                "M2 2h2l2.7 12.4a2 2 0 0 0 2 1.6h9.7a2 2 0 0 0 2-1.6L22 7H5.1",
            ],
            Icon::Cloud => &["M17.5 19H9a7 7 0 1 1 6.7-9h1.8a4.5 4.5 0 1 1 0 9z"],
            Icon::BarChart => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        href: "https://github.com",
        icon: Icon::Github,
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com",
        icon: Icon::Linkedin,
    },
    SocialLink {
        label: "Email",
        href: "mailto:hola@portfolio.dev",
        icon: Icon::Mail,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub repo: &'static str,
    pub demo: &'static str,
    pub icon: Icon,
}

pub static PROJECTS: [Project; 4] = [
    Project {
        title: "E-Commerce Platform",
        description: "Modern online shopping experience with React and Node.js",
        tech: &["React", "Node.js", "MongoDB", "Stripe"],
        repo: "#",
        demo: "#",
        icon: Icon::ShoppingCart,
    },
    Project {
        title: "Task Management App",
        description: "Collaborative project management tool with real-time updates",
        tech: &["Next.js", "TypeScript", "PostgreSQL", "Socket.io"],
        repo: "#",
        demo: "#",
        icon: Icon::Target,
    },
    Project {
        title: "Weather Dashboard",
        description: "Beautiful weather app with forecasts and interactive maps",
        tech: &["Vue.js", "API Integration", "Chart.js", "CSS3"],
        repo: "#",
        demo: "#",
        icon: Icon::Cloud,
    },
    Project {
        title: "Social Media Analytics",
        description: "Analytics dashboard for social media performance tracking",
        tech: &["Python", "React", "Django", "D3.js"],
        repo: "#",
        demo: "#",
        icon: Icon::BarChart,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Frontend,
    Backend,
    Tools,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Frontend, Category::Backend, Category::Tools];

    pub fn name(self) -> &'static str {
        match self {
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
            Category::Tools => "Tools",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Target percentage, 0..=100.
    pub level: u8,
    pub icon: Icon,
}

impl Skill {
    /// Key used to look up this skill's progress value.
    pub fn key(&self) -> String {
        skill_key(self.name)
    }
}

pub fn skill_key(name: &str) -> String {
    name.to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: Category,
    pub skills: &'static [Skill],
}

pub static SKILLS: [SkillGroup; 3] = [
    SkillGroup {
        category: Category::Frontend,
        skills: &[
            Skill {
                name: "React",
                level: 90,
                icon: Icon::Code,
            },
            Skill {
                name: "TypeScript",
                level: 85,
                icon: Icon::Code,
            },
            Skill {
                name: "Tailwind CSS",
                level: 88,
                icon: Icon::Palette,
            },
        ],
    },
    SkillGroup {
        category: Category::Backend,
        skills: &[
            Skill {
                name: "Node.js",
                level: 82,
                icon: Icon::Database,
            },
            Skill {
                name: "Python",
                level: 75,
                icon: Icon::Code,
            },
            Skill {
                name: "PostgreSQL",
                level: 78,
                icon: Icon::Database,
            },
        ],
    },
    SkillGroup {
        category: Category::Tools,
        skills: &[
            Skill {
                name: "Git",
                level: 92,
                icon: Icon::Code,
            },
            Skill {
                name: "Docker",
                level: 70,
                icon: Icon::Smartphone,
            },
            Skill {
                name: "Figma",
                level: 70,
                icon: Icon::Palette,
            },
        ],
    },
];

/// Skills of one category, in declaration order. Empty if the registry has no such group.
pub fn skills_in(category: Category) -> &'static [Skill] {
    SKILLS
        .iter()
        .find(|g| g.category == category)
        .map(|g| g.skills)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order() {
        let declared = SKILLS.iter().map(|g| g.category).collect::<Vec<_>>();
        assert_eq!(declared, Category::ALL.to_vec());
        assert_eq!(Category::default(), Category::Frontend);
    }

    #[test]
    fn test_skill_levels_in_range() {
        for group in SKILLS.iter() {
            assert_eq!(group.skills.len(), 3, "{} should have 3 skills", group.category);
            for skill in group.skills {
                assert!(skill.level <= 100, "{} level out of range", skill.name);
            }
        }
    }

    #[test]
    fn test_skills_in_preserves_order() {
        let names = skills_in(Category::Backend)
            .iter()
            .map(|s| s.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Node.js", "Python", "PostgreSQL"]);
    }

    #[test]
    fn test_skill_key_lowercases() {
        assert_eq!(skill_key("Tailwind CSS"), "tailwind css");
        assert_eq!(SKILLS[1].skills[0].key(), "node.js");
    }

    #[test]
    fn test_every_icon_has_outline() {
        for icon in Icon::ALL {
            let paths = icon.paths();
            assert!(!paths.is_empty(), "{icon:?} has no path data");
            for d in paths {
                assert!(d.starts_with('M'), "{icon:?} path must start with a moveto: {d}");
            }
        }
    }

    #[test]
    fn test_projects_order() {
        let titles = PROJECTS.iter().map(|p| p.title).collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec![
                "E-Commerce Platform",
                "Task Management App",
                "Weather Dashboard",
                "Social Media Analytics"
            ]
        );
        assert!(PROJECTS.iter().all(|p| p.tech.len() == 4));
    }
}
