//! Fixed marketing copy rendered by the page sections.
//!
//! Nothing here changes at runtime. Portfolio projects are addressed through
//! [`ProjectId`], which can only be obtained from the list itself, so the
//! selection controller can never point outside of it.

use crate::components::icons::IconKind;

#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub results: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
}

pub static PROJECTS: [Project; 4] = [
    Project {
        title: "E-Commerce App",
        category: "Web Development",
        image: "https://picsum.photos/id/20/800/600",
        results: "200% Increase in Sales",
        challenge: "Slow loading times and poor mobile conversion.",
        solution: "Implemented a headless commerce architecture with optimized asset delivery.",
    },
    Project {
        title: "SaaS Dashboard",
        category: "UI/UX Design",
        image: "https://picsum.photos/id/180/800/600",
        results: "45% Better Retention",
        challenge: "Complex navigation leading to user drop-offs.",
        solution: "Simplified the user journey with a clean, intuitive dashboard layout.",
    },
    Project {
        title: "Brand Identity",
        category: "Branding",
        image: "https://picsum.photos/id/445/800/600",
        results: "Global Brand Recognition",
        challenge: "Outdated visual identity that didn't resonate with modern audiences.",
        solution: "Created a vibrant, scalable design system that works across all platforms.",
    },
    Project {
        title: "SEO Campaign",
        category: "Digital Marketing",
        image: "https://picsum.photos/id/532/800/600",
        results: "Top 3 Google Rankings",
        challenge: "Low organic visibility in a highly competitive niche.",
        solution: "Executed a comprehensive content strategy and technical SEO audit.",
    },
];

/// Position of a project in [`PROJECTS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProjectId(usize);

impl ProjectId {
    pub fn all() -> impl Iterator<Item = ProjectId> {
        (0..PROJECTS.len()).map(ProjectId)
    }

    #[cfg(test)]
    pub fn by_title(title: &str) -> Option<ProjectId> {
        PROJECTS
            .iter()
            .position(|project| project.title == title)
            .map(ProjectId)
    }

    pub fn project(self) -> &'static Project {
        &PROJECTS[self.0]
    }

    pub fn index(self) -> usize {
        self.0
    }
}

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
    pub accent: &'static str,
}

pub static SERVICES: [Service; 6] = [
    Service {
        title: "Web Design",
        description: "Custom, responsive websites that convert visitors into loyal customers.",
        icon: IconKind::Code,
        accent: "#3b82f6",
    },
    Service {
        title: "SEO Optimization",
        description: "Rank higher on Google and drive organic traffic to your business.",
        icon: IconKind::Search,
        accent: "#6366f1",
    },
    Service {
        title: "Digital Marketing",
        description: "Data-driven strategies to grow your brand and increase ROI.",
        icon: IconKind::Megaphone,
        accent: "#a855f7",
    },
    Service {
        title: "Branding & Logo",
        description: "Unique visual identities that tell your brand's story effectively.",
        icon: IconKind::Palette,
        accent: "#ec4899",
    },
    Service {
        title: "Social Media",
        description: "Engage your audience and build a community around your brand.",
        icon: IconKind::Share,
        accent: "#f97316",
    },
    Service {
        title: "GMB Optimization",
        description: "Experts in GMB creation, verification, and local ranking to dominate search results.",
        icon: IconKind::Store,
        accent: "#2563eb",
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub avatar: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Priya Sharma",
        role: "CEO at TechFlow",
        quote: "Digital Mayur transformed our online presence. Our traffic has increased by 200% since we started working with them.",
        avatar: "https://picsum.photos/seed/t1/100/100",
    },
    Testimonial {
        name: "Rahul Mehta",
        role: "Founder of GreenLeaf",
        quote: "The best agency we've ever worked with. Their attention to detail and creative approach is unmatched.",
        avatar: "https://picsum.photos/seed/t2/100/100",
    },
    Testimonial {
        name: "Anjali Deshmukh",
        role: "Marketing Director",
        quote: "Professional, responsive, and results-oriented. They truly care about the success of their clients.",
        avatar: "https://picsum.photos/seed/t3/100/100",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub static NAV_LINKS: [NavLink; 6] = [
    NavLink { label: "Home", href: "#" },
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Portfolio", href: "#portfolio" },
    NavLink { label: "Testimonials", href: "#testimonials" },
    NavLink { label: "Contact", href: "#contact" },
];

pub static FOOTER_QUICK_LINKS: [NavLink; 5] = [
    NavLink { label: "Home", href: "#" },
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Portfolio", href: "#portfolio" },
    NavLink { label: "Contact", href: "#contact" },
];

pub static FOOTER_SERVICES: [&str; 5] = [
    "Web Design",
    "SEO Optimization",
    "Digital Marketing",
    "Branding",
    "GMB Services",
];

pub static SOCIAL_LINKS: [(&str, IconKind); 4] = [
    ("Facebook", IconKind::Facebook),
    ("Twitter", IconKind::Twitter),
    ("Instagram", IconKind::Instagram),
    ("LinkedIn", IconKind::Linkedin),
];

pub static ABOUT_POINTS: [&str; 4] = [
    "Results-driven digital strategies",
    "Expert team of designers & developers",
    "Personalized approach for every client",
    "Transparent communication & reporting",
];

// Section element ids. Nav and footer anchors must name one of these.
pub const SERVICES_SECTION: &str = "services";
pub const ABOUT_SECTION: &str = "about";
pub const PORTFOLIO_SECTION: &str = "portfolio";
pub const TESTIMONIALS_SECTION: &str = "testimonials";
pub const CONTACT_SECTION: &str = "contact";

pub fn hero_avatar(seed: u8) -> String {
    format!("https://picsum.photos/seed/user{}/100/100", seed)
}

pub const HERO_IMAGE: &str = "https://picsum.photos/seed/agency/800/800";
pub const ABOUT_IMAGE: &str = "https://picsum.photos/seed/about/800/1000";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_titles_are_unique() {
        let titles: HashSet<_> = PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(titles.len(), PROJECTS.len());
    }

    #[test]
    fn test_project_ids_cover_the_list() {
        let ids: Vec<_> = ProjectId::all().collect();
        assert_eq!(ids.len(), PROJECTS.len());
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(id.index(), i);
            assert!(std::ptr::eq(id.project(), &PROJECTS[i]));
        }
    }

    #[test]
    fn test_lookup_by_title() {
        let id = ProjectId::by_title("Brand Identity").expect("brand identity project");
        let project = id.project();
        assert_eq!(project.category, "Branding");
        assert_eq!(project.results, "Global Brand Recognition");

        assert!(ProjectId::by_title("Unknown Project").is_none());
    }

    #[test]
    fn test_images_are_https() {
        for project in PROJECTS.iter() {
            assert!(project.image.starts_with("https://"), "{}", project.title);
        }
        for testimonial in TESTIMONIALS.iter() {
            assert!(testimonial.avatar.starts_with("https://"));
        }
        assert!(hero_avatar(3).starts_with("https://"));
    }

    #[test]
    fn test_anchors_point_at_sections() {
        let sections = [
            SERVICES_SECTION,
            ABOUT_SECTION,
            PORTFOLIO_SECTION,
            TESTIMONIALS_SECTION,
            CONTACT_SECTION,
        ];
        for link in NAV_LINKS.iter().chain(FOOTER_QUICK_LINKS.iter()) {
            if link.href == "#" {
                continue;
            }
            let target = link.href.trim_start_matches('#');
            assert!(sections.contains(&target), "dangling anchor {}", link.href);
        }
    }

    #[test]
    fn test_nav_links_every_section() {
        for section in [SERVICES_SECTION, ABOUT_SECTION, PORTFOLIO_SECTION, TESTIMONIALS_SECTION, CONTACT_SECTION] {
            let href = format!("#{}", section);
            assert!(NAV_LINKS.iter().any(|link| link.href == href), "no nav link to {}", section);
        }
    }
}
