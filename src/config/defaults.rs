//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization. The
//! defaults ARE the theme's shipped configuration: parsing an empty
//! `theme.toml` yields the complete registry the theme renders out of
//! the box.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn title() -> String {
        "Litos".into()
    }

    pub fn description() -> String {
        "Litos is a simple & modern blog theme.".into()
    }

    pub fn website() -> String {
        "https://litos.vercel.app/".into()
    }

    pub fn base() -> String {
        "/".into()
    }

    pub fn author() -> String {
        "Dnzzk2".into()
    }

    pub fn og_image() -> String {
        "/og-image.jpg".into()
    }
}

// ============================================================================
// [links] Section Defaults
// ============================================================================

pub mod links {
    use super::super::links::{Link, SocialLink};

    pub fn header() -> Vec<Link> {
        vec![
            Link {
                name: "Projects".into(),
                url: "/projects".into(),
            },
            Link {
                name: "Experience".into(),
                url: "/experience".into(),
            },
            Link {
                name: "Posts".into(),
                url: "/posts".into(),
            },
        ]
    }

    pub fn footer() -> Vec<Link> {
        vec![
            Link {
                name: "Readme".into(),
                url: "/".into(),
            },
            Link {
                name: "Posts".into(),
                url: "/posts".into(),
            },
            Link {
                name: "Projects".into(),
                url: "/projects".into(),
            },
            Link {
                name: "Tags".into(),
                url: "/tags".into(),
            },
        ]
    }

    // icon identifiers come from https://icon-sets.iconify.design/
    pub fn social() -> Vec<SocialLink> {
        vec![
            SocialLink {
                name: "github".into(),
                url: "https://github.com/yourname".into(),
                icon: "icon-[ri--github-fill]".into(),
            },
            SocialLink {
                name: "twitter".into(),
                url: "https://x.com/yourname".into(),
                icon: "icon-[ri--twitter-x-fill]".into(),
            },
            SocialLink {
                name: "bilibili".into(),
                url: "https://space.bilibili.com/yourSpaceId".into(),
                icon: "icon-[ri--bilibili-fill]".into(),
            },
        ]
    }
}

// ============================================================================
// [skills] Section Defaults
// ============================================================================

pub mod skills {
    use super::super::skills::{ScrollDirection, Skill, SkillGroup};

    fn skill(name: &str, icon: &str) -> Skill {
        Skill {
            name: name.into(),
            icon: icon.into(),
        }
    }

    pub fn groups() -> Vec<SkillGroup> {
        vec![
            SkillGroup {
                direction: ScrollDirection::Left,
                skills: vec![
                    skill("JavaScript", "icon-[mdi--language-javascript]"),
                    skill("CSS", "icon-[mdi--language-css3]"),
                    skill("HTML", "icon-[mdi--language-html5]"),
                    skill("React", "icon-[mdi--react]"),
                    skill("Vue.js", "icon-[mdi--vuejs]"),
                    skill("Tailwind CSS", "icon-[mdi--tailwind]"),
                    skill("SCSS", "icon-[mdi--language-css3]"),
                    skill("Bootstrap", "icon-[mdi--bootstrap]"),
                    skill("WebSquare", "icon-[mdi--web]"),
                ],
            },
            SkillGroup {
                direction: ScrollDirection::Right,
                skills: vec![
                    skill("Git", "icon-[mdi--git]"),
                    skill("SVN", "icon-[simple-icons--subversion]"),
                    skill("Figma", "icon-[lineicons--figma]"),
                    skill("Zeplin", "icon-[mdi--palette-outline]"),
                    skill("Sketch", "icon-[lineicons--sketch]"),
                    skill("Adobe XD", "icon-[simple-icons--adobexd]"),
                    skill("Adobe Photoshop", "icon-[simple-icons--adobephotoshop]"),
                    skill("Cursor AI", "icon-[mdi--robot]"),
                ],
            },
        ]
    }
}

// ============================================================================
// [github] Section Defaults
// ============================================================================

pub mod github {
    /// 1.5 hours plus a 5 minute stagger, in seconds.
    pub fn cache_duration() -> u64 {
        60 * 90 + 60 * 5
    }
}

// ============================================================================
// Page Section Defaults
// ============================================================================

pub mod posts {
    use super::super::pages::{ListLayout, PageListConfig};

    pub fn title() -> String {
        "Posts".into()
    }

    pub fn description() -> String {
        "Posts by Dnzzk2".into()
    }

    pub fn introduce() -> String {
        "Here, I will share the usage instructions for this theme to help you quickly use it."
            .into()
    }

    pub fn author() -> String {
        "Dnzzk2".into()
    }

    pub fn home_page() -> PageListConfig {
        PageListConfig {
            size: 5,
            layout: ListLayout::Compact,
        }
    }

    pub fn post_page() -> PageListConfig {
        PageListConfig {
            size: 10,
            layout: ListLayout::Image,
        }
    }

    pub fn tags_page() -> PageListConfig {
        PageListConfig {
            size: 10,
            layout: ListLayout::TimeLine,
        }
    }

    pub fn default_hero_image() -> String {
        "/og-image.jpg".into()
    }

    pub fn default_hero_image_aspect_ratio() -> String {
        "16/9".into()
    }

    pub fn read_more_text() -> String {
        "Read more".into()
    }

    pub fn prev_page_text() -> String {
        "Previous".into()
    }

    pub fn next_page_text() -> String {
        "Next".into()
    }

    pub fn toc_text() -> String {
        "Catalogue".into()
    }

    pub fn back_to_posts_text() -> String {
        "Back to Posts".into()
    }

    pub fn next_post_text() -> String {
        "Next Post".into()
    }

    pub fn prev_post_text() -> String {
        "Previous Post".into()
    }
}

pub mod tags {
    pub fn title() -> String {
        "Tags".into()
    }

    pub fn description() -> String {
        "All tags of Posts".into()
    }

    pub fn introduce() -> String {
        "All the tags for posts are here, you can click to filter them.".into()
    }
}

pub mod projects {
    pub fn title() -> String {
        "Projects".into()
    }

    pub fn description() -> String {
        "The examples of my projects.".into()
    }

    pub fn introduce() -> String {
        "The examples of my projects.".into()
    }
}

pub mod experience {
    pub fn title() -> String {
        "Experience".into()
    }

    pub fn description() -> String {
        "My professional journey and educational background".into()
    }

    pub fn introduce() -> String {
        "Here is an overview of my career path, education, and the skills I have developed along the way."
            .into()
    }
}

pub mod pages {
    use super::super::pages::ListLayout;

    pub fn size() -> usize {
        10
    }

    pub fn layout() -> ListLayout {
        ListLayout::default()
    }
}

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    use super::super::content::{Award, Experience, ExperienceKind, Project, ProjectCard};

    pub fn projects() -> Vec<Project> {
        vec![Project {
            name: "Litos".into(),
            description: "A simple & modern blog theme.".into(),
            github_url: "https://github.com/Dnzzk2/Litos".into(),
            website: "https://litos.vercel.app/".into(),
            card: ProjectCard::Image,
            icon: "/projects/logo.png".into(),
            star: 11,
            fork: 4,
        }]
    }

    pub fn experience() -> Vec<Experience> {
        vec![
            Experience {
                title: "Frontend Developer".into(),
                organization: "Tech Company".into(),
                location: "Seoul, Korea".into(),
                start_date: "2023-01".into(),
                end_date: "Present".into(),
                kind: ExperienceKind::Work,
                description: "Developed and maintained modern web applications using React, TypeScript, and various frontend technologies. Collaborated with cross-functional teams to deliver high-quality user experiences.".into(),
                skills: vec![
                    "React".into(),
                    "TypeScript".into(),
                    "Tailwind CSS".into(),
                    "Git".into(),
                    "Figma".into(),
                ],
                logo: "/experience/company-logo.png".into(),
            },
            Experience {
                title: "Junior Developer".into(),
                organization: "Startup Inc.".into(),
                location: "Seoul, Korea".into(),
                start_date: "2022-03".into(),
                end_date: "2022-12".into(),
                kind: ExperienceKind::Work,
                description: "Built responsive web interfaces and contributed to the development of company products. Gained experience in agile development methodologies.".into(),
                skills: vec![
                    "JavaScript".into(),
                    "Vue.js".into(),
                    "CSS".into(),
                    "HTML".into(),
                ],
                logo: "/experience/startup-logo.png".into(),
            },
            Experience {
                title: "Computer Science".into(),
                organization: "University of Technology".into(),
                location: "Seoul, Korea".into(),
                start_date: "2018-03".into(),
                end_date: "2022-02".into(),
                kind: ExperienceKind::Education,
                description: "Bachelor of Science in Computer Science. Focused on software engineering, algorithms, and web development. Graduated with honors.".into(),
                skills: vec![
                    "Data Structures".into(),
                    "Algorithms".into(),
                    "Software Engineering".into(),
                    "Database Design".into(),
                ],
                logo: "/experience/university-logo.png".into(),
            },
        ]
    }

    pub fn awards() -> Vec<Award> {
        vec![
            Award {
                title: "Best Frontend Developer Award".into(),
                organization: "Tech Conference 2023".into(),
                date: "2023-11".into(),
                description: "Recognized for outstanding contribution to frontend development and innovative UI/UX solutions.".into(),
                category: "Development".into(),
                image: "/awards/frontend-award.png".into(),
            },
            Award {
                title: "Excellence in Web Development".into(),
                organization: "University of Technology".into(),
                date: "2022-02".into(),
                description: "Awarded for exceptional performance in web development coursework and final project.".into(),
                category: "Academic".into(),
                image: "/awards/academic-award.png".into(),
            },
            Award {
                title: "Innovation Challenge Winner".into(),
                organization: "Startup Inc.".into(),
                date: "2022-08".into(),
                description: "First place in company-wide innovation challenge for developing an efficient web application.".into(),
                category: "Innovation".into(),
                image: "/awards/innovation-award.png".into(),
            },
        ]
    }
}
