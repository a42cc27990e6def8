//! Skill-keyword matching against a fixed vocabulary.

use jobpulse_core::SearchSnippet;

use crate::text::corpus;

/// Known skill and technology terms, in reporting priority order.
pub const SKILL_VOCABULARY: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "React",
    "Node.js",
    "AWS",
    "Docker",
    "Kubernetes",
    "SQL",
    "MongoDB",
    "TypeScript",
    "Angular",
    "Vue.js",
    "Git",
    "Agile",
    "Scrum",
    "Machine Learning",
    "AI",
    "Data Analysis",
    "Project Management",
    "Leadership",
    "Communication",
    "Problem Solving",
    "Teamwork",
    "HTML",
    "CSS",
    "REST API",
    "GraphQL",
    "Redux",
    "Express",
    "Spring Boot",
    "Django",
    "Flask",
    "Laravel",
];

const MAX_SKILLS: usize = 15;

/// Case-insensitive substring match of the vocabulary against the corpus.
/// Output order follows the vocabulary, not the input; at most 15 returned.
#[must_use]
pub fn extract_skills(snippets: &[SearchSnippet]) -> Vec<String> {
    if snippets.is_empty() {
        return Vec::new();
    }

    let text = corpus(snippets);
    SKILL_VOCABULARY
        .iter()
        .filter(|skill| text.contains(&skill.to_lowercase()))
        .take(MAX_SKILLS)
        .map(ToString::to_string)
        .collect()
}
