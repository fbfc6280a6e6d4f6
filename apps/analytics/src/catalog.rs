//! Static lookup tables shared by the classifiers and analyzers.
//!
//! Built once per process and handed out as `Arc<Catalog>`; nothing here is
//! mutated after construction.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::text::keywords::contains_term;

// ────────────────────────────────────────────────────────────────────────────
// Table rows
// ────────────────────────────────────────────────────────────────────────────

/// A classification domain and the literal lowercase phrases that signal it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainSpec {
    pub label: String,
    pub keywords: Vec<String>,
    pub weight: f64,
}

/// Where and how long to learn a skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningResource {
    pub platform: String,
    pub time: String,
    pub level: String,
}

impl LearningResource {
    /// Fallback for skills absent from the resource table.
    pub fn search_fallback(skill: &str) -> Self {
        Self {
            platform: format!("Search '{skill} tutorial'"),
            time: "2-4 weeks".to_string(),
            level: "varies".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Ranked in insertion order on score ties.
    pub domains: Vec<DomainSpec>,
    pub fallback_domain: String,
    /// Target skill → related/prerequisite skills. One hop only.
    pub skill_taxonomy: Vec<(String, Vec<String>)>,
    pub learning_resources: Vec<(String, LearningResource)>,
    /// Category → known technology terms, original casing.
    pub skill_categories: Vec<(String, Vec<String>)>,
    /// Category → action verbs, capitalised.
    pub verb_categories: Vec<(String, Vec<String>)>,
    /// Role keyword → skills commonly asked of that role, most important first.
    pub role_skills: Vec<(String, Vec<String>)>,
    /// Suggested when no role keyword applies.
    pub generic_skills: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

static SHARED: Lazy<Arc<Catalog>> = Lazy::new(|| Arc::new(Catalog::builtin()));

impl Catalog {
    /// Process-wide read-only instance.
    pub fn shared() -> Arc<Catalog> {
        Arc::clone(&SHARED)
    }

    pub fn builtin() -> Self {
        Self {
            domains: DOMAIN_KEYWORDS
                .iter()
                .map(|(label, keywords)| DomainSpec {
                    label: label.to_string(),
                    keywords: owned(keywords),
                    weight: 1.0,
                })
                .collect(),
            fallback_domain: FALLBACK_DOMAIN.to_string(),
            skill_taxonomy: owned_table(SKILL_TAXONOMY),
            learning_resources: LEARNING_RESOURCES
                .iter()
                .map(|(skill, platform, time, level)| {
                    (
                        skill.to_string(),
                        LearningResource {
                            platform: platform.to_string(),
                            time: time.to_string(),
                            level: level.to_string(),
                        },
                    )
                })
                .collect(),
            skill_categories: owned_table(SKILL_CATEGORIES),
            verb_categories: owned_table(VERB_CATEGORIES),
            role_skills: owned_table(ROLE_SKILLS),
            generic_skills: owned(GENERIC_SKILLS),
        }
    }

    /// Case-insensitive taxonomy lookup.
    pub fn related_skills(&self, skill: &str) -> Option<&[String]> {
        self.skill_taxonomy
            .iter()
            .find(|(target, _)| target.eq_ignore_ascii_case(skill))
            .map(|(_, related)| related.as_slice())
    }

    /// Case-insensitive resource lookup, falling back to a search hint.
    pub fn learning_resource(&self, skill: &str) -> LearningResource {
        self.learning_resources
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(skill))
            .map(|(_, resource)| resource.clone())
            .unwrap_or_else(|| LearningResource::search_fallback(skill))
    }

    pub fn verbs_in(&self, category: &str) -> &[String] {
        self.verb_categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, verbs)| verbs.as_slice())
            .unwrap_or(&[])
    }

    pub fn all_verbs(&self) -> impl Iterator<Item = &str> {
        self.verb_categories
            .iter()
            .flat_map(|(_, verbs)| verbs.iter().map(String::as_str))
    }

    /// Skill lists of every role keyword found in `target_role`, in table order.
    pub fn skills_for_role(&self, target_role: &str) -> impl Iterator<Item = &[String]> + '_ {
        let role = target_role.to_lowercase();
        self.role_skills
            .iter()
            .filter(move |(key, _)| contains_term(&role, key))
            .map(|(_, skills)| skills.as_slice())
    }

    pub fn all_skill_terms(&self) -> impl Iterator<Item = &str> {
        self.skill_categories
            .iter()
            .flat_map(|(_, terms)| terms.iter().map(String::as_str))
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn owned_table(table: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
    table
        .iter()
        .map(|(key, values)| (key.to_string(), owned(values)))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Built-in data
// ────────────────────────────────────────────────────────────────────────────

const FALLBACK_DOMAIN: &str = "Software Engineering";

const DOMAIN_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Software Engineering",
        &[
            "react",
            "node",
            "python",
            "java",
            "c++",
            "rest api",
            "microservices",
            "algorithms",
            "data structures",
            "backend",
            "frontend",
            "fullstack",
            "typescript",
            "kubernetes",
        ],
    ),
    (
        "Data Science & ML",
        &[
            "machine learning",
            "deep learning",
            "tensorflow",
            "pytorch",
            "pandas",
            "numpy",
            "scikit-learn",
            "nlp",
            "computer vision",
            "neural network",
            "dataset",
            "model training",
            "data analysis",
            "statistics",
            "regression",
            "classification",
        ],
    ),
    (
        "DevOps & Cloud",
        &[
            "docker",
            "kubernetes",
            "aws",
            "azure",
            "gcp",
            "terraform",
            "ci/cd",
            "jenkins",
            "ansible",
            "prometheus",
            "grafana",
            "infrastructure",
            "pipeline",
            "deployment",
        ],
    ),
    (
        "Mobile Development",
        &[
            "android",
            "ios",
            "flutter",
            "react native",
            "swift",
            "kotlin",
            "mobile app",
            "play store",
            "app store",
            "xcode",
            "android studio",
        ],
    ),
    (
        "UI/UX Design",
        &[
            "figma",
            "sketch",
            "adobe xd",
            "user research",
            "wireframe",
            "prototype",
            "design system",
            "usability",
            "ux",
            "ui",
            "typography",
            "accessibility",
        ],
    ),
    (
        "Finance & Quant",
        &[
            "financial modeling",
            "bloomberg",
            "quantitative",
            "risk",
            "portfolio",
            "trading",
            "excel",
            "valuation",
            "derivatives",
            "hedge fund",
            "equity",
        ],
    ),
];

const SKILL_TAXONOMY: &[(&str, &[&str])] = &[
    ("React", &["JavaScript", "HTML", "CSS", "TypeScript", "Node.js"]),
    (
        "Machine Learning",
        &["Python", "NumPy", "Pandas", "Scikit-learn", "Mathematics", "Statistics"],
    ),
    (
        "Deep Learning",
        &["Python", "TensorFlow", "PyTorch", "Machine Learning", "NumPy", "CUDA"],
    ),
    (
        "Backend Development",
        &["Python", "Node.js", "PostgreSQL", "REST API", "Authentication", "Docker"],
    ),
    (
        "Data Engineering",
        &["Python", "SQL", "Apache Spark", "Airflow", "AWS", "ETL"],
    ),
    (
        "DevOps",
        &["Docker", "Kubernetes", "CI/CD", "Linux", "Bash", "Cloud Platforms"],
    ),
    (
        "Mobile Development",
        &["Flutter", "Swift", "Kotlin", "REST API", "Firebase"],
    ),
    (
        "Full Stack",
        &["React", "Node.js", "PostgreSQL", "Docker", "Git", "REST API"],
    ),
];

/// (skill, platform, time, level)
const LEARNING_RESOURCES: &[(&str, &str, &str, &str)] = &[
    ("Python", "Python.org", "2-4 weeks", "beginner"),
    ("React", "React.dev", "3-6 weeks", "intermediate"),
    ("Docker", "Docker Docs", "1-2 weeks", "intermediate"),
    ("Machine Learning", "Coursera / fast.ai", "8-12 weeks", "advanced"),
    ("Kubernetes", "CNCF Learning", "3-4 weeks", "advanced"),
    ("TypeScript", "TypeScript Handbook", "2-3 weeks", "intermediate"),
    ("PostgreSQL", "PostgreSQL Tutorial", "2-3 weeks", "beginner"),
    ("AWS", "AWS Skill Builder", "4-8 weeks", "intermediate"),
];

const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "languages",
        &[
            "Python", "JavaScript", "TypeScript", "Java", "C++", "C#", "Go", "Rust", "Swift",
            "Kotlin", "R", "MATLAB", "PHP", "Ruby", "Scala",
        ],
    ),
    (
        "frameworks",
        &[
            "React",
            "Next.js",
            "Vue",
            "Angular",
            "FastAPI",
            "Django",
            "Flask",
            "Spring",
            "Express",
            "Node.js",
            "TensorFlow",
            "PyTorch",
            "Scikit-learn",
            "Keras",
        ],
    ),
    (
        "databases",
        &[
            "PostgreSQL",
            "MySQL",
            "MongoDB",
            "Redis",
            "Elasticsearch",
            "SQLite",
            "Cassandra",
            "DynamoDB",
            "Firebase",
        ],
    ),
    (
        "cloud",
        &[
            "AWS",
            "Azure",
            "GCP",
            "Docker",
            "Kubernetes",
            "CI/CD",
            "Terraform",
            "Jenkins",
        ],
    ),
    (
        "tools",
        &[
            "Git", "GitHub", "Jira", "Figma", "VS Code", "Linux", "Bash", "REST API", "GraphQL",
        ],
    ),
    (
        "soft_skills",
        &[
            "Problem-solving",
            "Communication",
            "Teamwork",
            "Leadership",
            "Adaptability",
            "Critical Thinking",
        ],
    ),
];

const VERB_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "leadership",
        &[
            "Led",
            "Managed",
            "Directed",
            "Coordinated",
            "Supervised",
            "Spearheaded",
            "Orchestrated",
        ],
    ),
    (
        "development",
        &[
            "Built",
            "Developed",
            "Engineered",
            "Architected",
            "Implemented",
            "Deployed",
            "Designed",
        ],
    ),
    (
        "achievement",
        &[
            "Achieved",
            "Delivered",
            "Exceeded",
            "Surpassed",
            "Accomplished",
            "Attained",
        ],
    ),
    (
        "improvement",
        &[
            "Optimized",
            "Enhanced",
            "Streamlined",
            "Improved",
            "Reduced",
            "Increased",
            "Boosted",
        ],
    ),
    (
        "collaboration",
        &[
            "Collaborated",
            "Partnered",
            "Contributed",
            "Supported",
            "Assisted",
            "Facilitated",
        ],
    ),
    (
        "research",
        &[
            "Researched",
            "Analyzed",
            "Investigated",
            "Evaluated",
            "Assessed",
            "Studied",
        ],
    ),
    (
        "communication",
        &[
            "Presented",
            "Communicated",
            "Authored",
            "Published",
            "Documented",
            "Trained",
        ],
    ),
];

const ROLE_SKILLS: &[(&str, &[&str])] = &[
    (
        "frontend",
        &["TypeScript", "React", "Next.js", "Tailwind CSS", "GraphQL", "Webpack", "Jest"],
    ),
    (
        "backend",
        &["Docker", "PostgreSQL", "Redis", "Kubernetes", "Kafka", "gRPC", "Terraform"],
    ),
    (
        "fullstack",
        &["TypeScript", "Docker", "PostgreSQL", "Redis", "GraphQL", "Jest", "CI/CD"],
    ),
    (
        "data",
        &["PySpark", "Airflow", "DBT", "Snowflake", "Tableau", "BigQuery", "MLflow"],
    ),
    (
        "ml",
        &["PyTorch", "Hugging Face", "MLflow", "LangChain", "ONNX", "Triton", "Ray"],
    ),
    (
        "devops",
        &["Terraform", "Ansible", "Prometheus", "Grafana", "ArgoCD", "Helm", "Vault"],
    ),
];

const GENERIC_SKILLS: &[&str] = &[
    "Docker",
    "Git",
    "PostgreSQL",
    "REST API",
    "Unit Testing",
    "CI/CD",
    "Agile",
];
