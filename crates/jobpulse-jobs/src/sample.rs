//! Deterministic local sample set, used only as a last-resort fallback.
//!
//! The records are not returned verbatim: they are ranked against the query
//! with an additive relevance score, zero-score records are dropped, and an
//! empty result degrades to the first five records so a non-trivial query
//! always yields some content.

use chrono::Utc;

use jobpulse_core::JobListing;

use crate::providers::PLACEHOLDER_LOGO_URL;

struct SampleRecord {
    title: &'static str,
    company_name: &'static str,
    category: &'static str,
    required_location: &'static str,
    salary_text: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
}

const SAMPLE_RECORDS: &[SampleRecord] = &[
    SampleRecord {
        title: "Senior Software Engineer",
        company_name: "TechCorp",
        category: "Software Development",
        required_location: "Remote, USA",
        salary_text: "$80,000 - $120,000",
        description: "Join our team as a Senior Software Engineer working on cutting-edge web applications.",
        tags: &["JavaScript", "React", "Node.js"],
    },
    SampleRecord {
        title: "Frontend Developer",
        company_name: "WebStudio",
        category: "Software Development",
        required_location: "Remote, Europe",
        salary_text: "$60,000 - $90,000",
        description: "Looking for a talented Frontend Developer to build amazing user interfaces.",
        tags: &["React", "TypeScript", "CSS"],
    },
    SampleRecord {
        title: "DevOps Engineer",
        company_name: "CloudTech",
        category: "DevOps",
        required_location: "Remote, Bangalore",
        salary_text: "$90,000 - $130,000",
        description: "Help us build and maintain scalable cloud infrastructure.",
        tags: &["AWS", "Docker", "Kubernetes"],
    },
    SampleRecord {
        title: "Python Developer",
        company_name: "DataFlow",
        category: "Software Development",
        required_location: "Remote, India",
        salary_text: "$70,000 - $100,000",
        description: "Join our data engineering team to build robust data pipelines.",
        tags: &["Python", "Django", "PostgreSQL"],
    },
    SampleRecord {
        title: "Full Stack Developer",
        company_name: "StartupHub",
        category: "Software Development",
        required_location: "Remote, Worldwide",
        salary_text: "$65,000 - $95,000",
        description: "Work across the entire stack in our fast-paced startup environment.",
        tags: &["JavaScript", "Node.js", "MongoDB"],
    },
    SampleRecord {
        title: "Mobile App Developer",
        company_name: "MobileFirst",
        category: "Mobile Development",
        required_location: "Remote, Bangalore",
        salary_text: "$75,000 - $110,000",
        description: "Create amazing mobile experiences for iOS and Android platforms.",
        tags: &["React Native", "iOS", "Android"],
    },
    SampleRecord {
        title: "Data Scientist",
        company_name: "AnalyticsAI",
        category: "Data Science",
        required_location: "Remote, USA/Europe",
        salary_text: "$85,000 - $125,000",
        description: "Use machine learning to solve complex business problems.",
        tags: &["Python", "Machine Learning", "TensorFlow"],
    },
    SampleRecord {
        title: "UI/UX Designer",
        company_name: "DesignLab",
        category: "Design",
        required_location: "Remote, India",
        salary_text: "$55,000 - $85,000",
        description: "Design beautiful and intuitive user experiences.",
        tags: &["Figma", "Adobe XD", "User Research"],
    },
    SampleRecord {
        title: "QA Automation Engineer",
        company_name: "QualityWorks",
        category: "Quality Assurance",
        required_location: "Remote, Worldwide",
        salary_text: "$60,000 - $90,000",
        description: "Build automated test suites that keep our releases dependable.",
        tags: &["Selenium", "Cypress", "CI/CD"],
    },
    SampleRecord {
        title: "Product Manager",
        company_name: "VisionSoft",
        category: "Product",
        required_location: "Remote, USA",
        salary_text: "$95,000 - $135,000",
        description: "Own the roadmap for our flagship collaboration product.",
        tags: &["Roadmapping", "Agile", "User Research"],
    },
];

/// Materializes the sample records as listings. `published_at` is stamped at
/// call time; everything else is fixed.
fn sample_jobs() -> Vec<JobListing> {
    let published_at = Utc::now().to_rfc3339();
    SAMPLE_RECORDS
        .iter()
        .enumerate()
        .map(|(idx, record)| JobListing {
            id: format!("sample-{}", idx + 1),
            title: record.title.to_string(),
            company_name: record.company_name.to_string(),
            company_logo_url: PLACEHOLDER_LOGO_URL.to_string(),
            category: record.category.to_string(),
            employment_type: "Full-time".to_string(),
            published_at: published_at.clone(),
            required_location: record.required_location.to_string(),
            salary_text: record.salary_text.to_string(),
            description: record.description.to_string(),
            detail_url: "#".to_string(),
            tags: record.tags.iter().map(|t| (*t).to_string()).collect(),
            source_provider: "sample".to_string(),
        })
        .collect()
}

/// Ranks the sample set against `query` and returns the surviving records,
/// best first.
///
/// Scoring is additive: title substring +10, each matching tag +5,
/// description +3, company name +1, and +2 for every query word longer than
/// two characters found anywhere in the record's searchable text.
/// Zero-score records are dropped; if nothing survives, the first five
/// records are returned unranked. An empty query returns the full set.
pub(crate) fn rank_sample_jobs(query: &str) -> Vec<JobListing> {
    let jobs = sample_jobs();
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return jobs;
    }

    let mut scored: Vec<(u32, JobListing)> = jobs
        .into_iter()
        .filter_map(|job| {
            let score = relevance_score(&job, &needle);
            (score > 0).then_some((score, job))
        })
        .collect();

    if scored.is_empty() {
        return sample_jobs().into_iter().take(5).collect();
    }

    // Stable sort keeps the declaration order for equal scores.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, job)| job).collect()
}

fn relevance_score(job: &JobListing, needle: &str) -> u32 {
    let title = job.title.to_lowercase();
    let company = job.company_name.to_lowercase();
    let description = job.description.to_lowercase();
    let tags: Vec<String> = job.tags.iter().map(|t| t.to_lowercase()).collect();

    let mut score = 0;
    if title.contains(needle) {
        score += 10;
    }
    for tag in &tags {
        if tag.contains(needle) {
            score += 5;
        }
    }
    if description.contains(needle) {
        score += 3;
    }
    if company.contains(needle) {
        score += 1;
    }

    let haystack = format!(
        "{title} {company} {} {description} {}",
        job.category.to_lowercase(),
        tags.join(" ")
    );
    for word in needle.split_whitespace().filter(|w| w.len() > 2) {
        if haystack.contains(word) {
            score += 2;
        }
    }

    score
}
