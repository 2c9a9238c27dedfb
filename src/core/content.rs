use crate::domain::model::{ContentStore, Experience, Highlight, LinkSet, Project, ProjectLink};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn experience(
    organization: &str,
    role: &str,
    location: &str,
    period: &str,
    bullets: &[&str],
    tags: &[&str],
) -> Experience {
    Experience {
        organization: organization.to_string(),
        role: role.to_string(),
        location: location.to_string(),
        period: period.to_string(),
        bullets: strings(bullets),
        tags: tags.iter().map(|s| s.to_string()).collect(),
    }
}

fn project(title: &str, description: &str, links: &[(&str, &str)], stack: &[&str]) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        links: links
            .iter()
            .map(|(href, label)| ProjectLink {
                href: href.to_string(),
                label: label.to_string(),
            })
            .collect(),
        stack: stack.iter().map(|s| s.to_string()).collect(),
    }
}

/// The page content shipped with the site. `base_url` prefixes the static documents.
pub fn builtin(base_url: &str) -> ContentStore {
    let links = LinkSet {
        email: "matthewsu02@gmail.com".to_string(),
        linkedin: "https://www.linkedin.com/in/matthew-su-96a52a1a7/".to_string(),
        youtube: "https://www.youtube.com/@MatthewSu".to_string(),
        resume: format!("{}resume.pdf", base_url),
        x_handle: "satthewmu".to_string(),
        x_url: "https://twitter.com/satthewmu".to_string(),
        instagram_url: "https://www.instagram.com/matthew_su/".to_string(),
        writing_valuation: format!("{}writing/model-valuation.pdf", base_url),
        writing_research: format!("{}writing/research-paper.pdf", base_url),
        instagram_embed_src: Some(
            "https://widgets.sociablekit.com/instagram-feed/iframe/25588031".to_string(),
        ),
    };

    let highlights = vec![
        Highlight {
            label: "Wharton B.S. (Real Estate & Finance)".to_string(),
            value: "UPenn".to_string(),
        },
        Highlight {
            label: "Content Creator".to_string(),
            value: "15k subs, 1M+ views".to_string(),
        },
        Highlight {
            label: "Tech + Finance".to_string(),
            value: "AI, Python, SQL, Java, VBA, Xceptor".to_string(),
        },
    ];

    let skills = strings(&[
        "Python",
        "Java",
        "SQL",
        "PowerBI",
        "Excel",
        "VBA",
        "Xceptor",
        "Figma",
        "Adobe Suite",
        "Salesforce",
        "Public Speaking",
        "Mandarin",
    ]);

    let experiences = vec![
        experience(
            "Citadel",
            "Credit Summer Analyst",
            "New York, NY",
            "May 2024 – Aug 2024",
            &[
                "Automated ASCOT reconciliation (Python + Xceptor), cutting processing time ~50%.",
                "Built broker performance dashboard (6 groups, 20+ products) for real‑time insights.",
                "Designed internal ticketing tooling; reduced trade approval lag by >60 minutes.",
            ],
            &["Structured Credit", "Process Automation", "Dashboards"],
        ),
        experience(
            "Summit Trail Advisors",
            "Asset Management Fall Analyst",
            "New York, NY",
            "Sep 2024 – Dec 2024",
            &[
                "Doubled reporting workflow efficiency with VBA/Excel across 10+ PE vehicles.",
                "Performed fund manager analysis & attribution modeling to support IC decisions.",
                "Joined UHNW client and manager meetings to evaluate performance and pitches.",
            ],
            &["UHNW", "Attribution", "Automation"],
        ),
        experience(
            "GitHub",
            "Business Operations Intern",
            "Remote",
            "Jun 2023 – Aug 2023",
            &[
                "Shaped GTM pitch for Copilot AI & GHAS; adopted org‑wide.",
                "Launched onboarding with DS & L&D; boosted client engagement ~40%.",
                "Market research + competitor analysis to inform sales enablement roadmaps.",
            ],
            &["AI", "GTM", "Enablement"],
        ),
    ];

    let projects = vec![
        project(
            "Auto Mashup Maker",
            "Web app aligning BPM and key to auto‑generate song mashups. Built for creators; demonstrates DSP + product sense.",
            &[("#", "Demo (Pending)")],
            &["Python", "DSP", "Vite + React"],
        ),
        project(
            "AI Site Auditor (AEO)",
            "Chrome extension + backend that analyzes webpage structure and recommends AI search‑friendly schema.",
            &[("https://github.com/matthewwsu/aeyo", "Repo")],
            &["LLMs", "Chrome API", "Flask"],
        ),
        project(
            "Quant Portfolio Optimizer",
            "Tool that recommends allocations via MVO with target return; tunable constraints and BL integrations. Built for portfolio testing.",
            &[("https://github.com/YOUR_GITHUB_USERNAME/quant-optimizer", "Repo")],
            &["Python", "Pandas", "Optimization"],
        ),
    ];

    ContentStore {
        skills,
        links,
        highlights,
        experiences,
        projects,
    }
}
