use crate::domain::model::{Dataset, Education, ExperienceEntry, Profile, Project, SkillCategory};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_link, validate_non_empty_string, validate_web_url};

pub static PROFILE: Profile = Profile {
    name: "Basheer Ahmed",
    headline: "ML Engineer & Data Scientist",
    tagline: "Building production-ready AI solutions with expertise in ML pipelines, \
              cloud deployment, and full-stack development",
    bio: "Results-driven ML Engineer and Data Scientist with hands-on experience in end-to-end machine \
          learning pipelines, cloud deployment, and full-stack development. Proven track record of delivering \
          production-ready AI solutions that drive business impact, including predictive models achieving 84% \
          accuracy and recommendation systems serving 10K+ users.",
    availability: "I'm currently available for new opportunities. Whether you have a question or just want to say hi, \
                   I'll get back to you!",
    email: "basheerahmedshk@gmail.com",
    phone_display: "+91 8340676856",
    phone_uri: "tel:+918340676856",
    location: "Vijayawada, Andhra Pradesh, India",
    linkedin_url: "https://linkedin.com/in/basheerahmedshaik",
    github_url: "https://github.com/BasheerAhmedshk",
    footer: "© 2025 Shaik Basheer Ahmed. Built with Rust & Tailwind CSS",
};

pub static FLAGSHIP_PROJECTS: &[Project] = &[
    Project {
        title: "Intelligent Document Q&A System with RAG",
        description: "Production-ready document intelligence system processing 10K+ PDFs with 92% answer accuracy using RAG architecture",
        technologies: &["HuggingFace", "FAISS", "Langchain", "FastAPI", "MongoDB", "Vercel"],
        impact: Some("Reduced document review time by 60% for legal teams"),
        category: "NLP/RAG",
    },
    Project {
        title: "Real-Time Fraud Detection System",
        description: "Real-time fraud detection pipeline processing 100K+ transactions/day with 96% precision using ensemble models",
        technologies: &["TensorFlow", "Redis", "PostgreSQL", "AWS", "LightGBM"],
        impact: Some("Prevented $50K+ potential fraud losses during testing phase"),
        category: "ML/Production",
    },
    Project {
        title: "MediQ — RAG-Powered Medical Chatbot",
        description: "Intelligent medical chatbot using FAISS vector database and LLMs, achieving 94% response accuracy with 40k medical responses",
        technologies: &["HuggingFace", "FAISS", "Langchain", "FastAPI", "MongoDB"],
        impact: Some("Improved medical information accessibility for healthcare professionals"),
        category: "NLP/Healthcare",
    },
    Project {
        title: "Automated Data Pipeline for Business Intelligence",
        description: "ETL pipeline processing data from multiple sources with automated quality checks and anomaly detection",
        technologies: &["Apache Spark", "PySpark", "Tableau", "Python", "PostgreSQL"],
        impact: Some("Reduced manual reporting time and improved data accuracy"),
        category: "Data Engineering",
    },
    Project {
        title: "Computer Vision Quality Control System",
        description: "Defect detection system using pre-trained CNN models with automated annotation tools",
        technologies: &["TensorFlow", "CNN", "Flask", "MongoDB", "Streamlit"],
        impact: Some("Reduced manual inspection time and improved defect detection"),
        category: "Computer Vision",
    },
];

pub static OPEN_SOURCE_PROJECTS: &[Project] = &[
    Project {
        title: "AI-Powered Code Review Assistant",
        description: "Automated code review system using LLMs to identify bugs, security vulnerabilities, and suggest improvements",
        technologies: &["OpenAI API", "Python", "FastAPI", "React"],
        impact: None,
        category: "DevTools",
    },
    Project {
        title: "Sentiment Analysis Dashboard",
        description: "Real-time sentiment analysis of social media data with interactive visualizations and trend predictions",
        technologies: &["BERT", "Plotly", "Streamlit", "MongoDB"],
        impact: None,
        category: "NLP",
    },
    Project {
        title: "Recommendation Engine Framework",
        description: "Scalable recommendation system framework supporting collaborative filtering and content-based methods",
        technologies: &["PyTorch", "FastAPI", "Redis", "PostgreSQL"],
        impact: None,
        category: "ML Systems",
    },
    Project {
        title: "IoT Sensor Data Analytics",
        description: "Real-time analytics platform for IoT sensor data with predictive maintenance capabilities",
        technologies: &["Apache Kafka", "PySpark", "InfluxDB", "Grafana"],
        impact: None,
        category: "IoT/Analytics",
    },
    Project {
        title: "Text Summarization API",
        description: "RESTful API for extractive and abstractive text summarization using transformer models",
        technologies: &["HuggingFace", "FastAPI", "Docker", "AWS"],
        impact: None,
        category: "NLP",
    },
];

pub static SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Programming",
        skills: &["Python", "SQL", "HTML/CSS", "Bash"],
    },
    SkillCategory {
        name: "ML/AI",
        skills: &["TensorFlow", "PyTorch", "Scikit-learn", "LightGBM", "HuggingFace"],
    },
    SkillCategory {
        name: "Cloud",
        skills: &["AWS EC2", "S3", "SageMaker", "GCP Vertex AI", "Vercel", "Heroku"],
    },
    SkillCategory {
        name: "Databases",
        skills: &["MongoDB", "PostgreSQL", "MySQL", "ChromaDB", "Pinecone", "FAISS"],
    },
    SkillCategory {
        name: "Big Data",
        skills: &["Apache Spark", "Hadoop", "PySpark", "Redis"],
    },
];

pub static EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        company: "Brainovision.org",
        role: "Data Science Intern",
        period: "Apr 2025 – Jun 2025",
        achievements: &[
            "Engineered predictive ML pipeline for hospital Length-of-Stay achieving R² = 0.84",
            "Implemented ensemble learning with LightGBM and Random Forest",
            "Deployed model on AWS EC2 with <200ms latency",
        ],
    },
    ExperienceEntry {
        company: "Cognifyz Technologies",
        role: "Machine Learning Intern",
        period: "May 2024 – Jul 2024",
        achievements: &[
            "Developed restaurant rating prediction system with 85% accuracy",
            "Built collaborative filtering recommendation engine increasing engagement by 23%",
            "Conducted geospatial analysis for optimal restaurant locations",
        ],
    },
];

pub static EDUCATION: &[Education] = &[
    Education {
        degree: "PGDM in AI & Data Science",
        institution: "Ashoka School of Business",
        period: "Aug 2023 – Jun 2025",
    },
    Education {
        degree: "BSc in IoT",
        institution: "KBN College",
        period: "Jul 2019 – Jun 2022",
    },
];

pub static CERTIFICATIONS: &[&str] = &[
    "SQL Analytics (IIT Guwahati)",
    "Certified Web Application Penetration Tester",
    "Deloitte STEM Virtual Internship",
    "PicoCTF Competition",
];

pub fn portfolio() -> Dataset {
    Dataset {
        profile: &PROFILE,
        flagship_projects: FLAGSHIP_PROJECTS,
        open_source_projects: OPEN_SOURCE_PROJECTS,
        skills: SKILLS,
        experience: EXPERIENCE,
        education: EDUCATION,
        certifications: CERTIFICATIONS,
    }
}

/// Pretty JSON of the built-in dataset, as printed by `--dump-data`.
pub fn dataset_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&portfolio())?)
}

fn dataset_error(field: String, err: SiteError) -> SiteError {
    SiteError::DatasetError {
        field,
        reason: err.to_string(),
    }
}

fn validate_projects(group: &str, projects: &[Project]) -> Result<()> {
    for (i, project) in projects.iter().enumerate() {
        let field = format!("{}[{}]", group, i);
        for (name, value) in [
            ("title", project.title),
            ("description", project.description),
            ("category", project.category),
        ] {
            validate_non_empty_string(name, value)
                .map_err(|e| dataset_error(format!("{}.{}", field, name), e))?;
        }
        if project.technologies.is_empty() {
            return Err(SiteError::DatasetError {
                field: format!("{}.technologies", field),
                reason: "at least one technology is required".to_string(),
            });
        }
        if let Some(impact) = project.impact {
            validate_non_empty_string("impact", impact)
                .map_err(|e| dataset_error(format!("{}.impact", field), e))?;
        }
    }
    Ok(())
}

/// Checks the compiled-in tables before anything is rendered.
pub fn validate_dataset(dataset: &Dataset) -> Result<()> {
    let profile = dataset.profile;
    for (name, value) in [
        ("profile.name", profile.name),
        ("profile.headline", profile.headline),
        ("profile.email", profile.email),
        ("profile.phone_display", profile.phone_display),
        ("profile.location", profile.location),
    ] {
        validate_non_empty_string(name, value).map_err(|e| dataset_error(name.to_string(), e))?;
    }
    validate_web_url("profile.linkedin_url", profile.linkedin_url)
        .map_err(|e| dataset_error("profile.linkedin_url".to_string(), e))?;
    validate_web_url("profile.github_url", profile.github_url)
        .map_err(|e| dataset_error("profile.github_url".to_string(), e))?;
    validate_link("profile.email", &profile.mailto(), &["mailto"])
        .map_err(|e| dataset_error("profile.email".to_string(), e))?;
    validate_link("profile.phone_uri", profile.phone_uri, &["tel"])
        .map_err(|e| dataset_error("profile.phone_uri".to_string(), e))?;
    if !profile.email.contains('@') {
        return Err(SiteError::DatasetError {
            field: "profile.email".to_string(),
            reason: "email address must contain '@'".to_string(),
        });
    }

    validate_projects("flagship_projects", dataset.flagship_projects)?;
    validate_projects("open_source_projects", dataset.open_source_projects)?;

    for category in dataset.skills {
        validate_non_empty_string("skills", category.name)
            .map_err(|e| dataset_error("skills".to_string(), e))?;
        if category.skills.is_empty() {
            return Err(SiteError::DatasetError {
                field: format!("skills.{}", category.name),
                reason: "category has no skills".to_string(),
            });
        }
    }

    for (i, entry) in dataset.experience.iter().enumerate() {
        for (name, value) in [
            ("company", entry.company),
            ("role", entry.role),
            ("period", entry.period),
        ] {
            validate_non_empty_string(name, value)
                .map_err(|e| dataset_error(format!("experience[{}].{}", i, name), e))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dataset_is_valid() {
        assert!(validate_dataset(&portfolio()).is_ok());
    }

    #[test]
    fn test_table_sizes() {
        let data = portfolio();
        assert_eq!(data.flagship_projects.len(), 5);
        assert_eq!(data.open_source_projects.len(), 5);
        assert_eq!(data.skills.len(), 5);
        assert_eq!(data.experience.len(), 2);
        assert!(data.open_source_projects.iter().all(|p| p.impact.is_none()));
        assert!(data.flagship_projects.iter().all(|p| p.impact.is_some()));
    }

    #[test]
    fn test_skill_categories_keep_declaration_order() {
        let names: Vec<_> = SKILLS.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            ["Programming", "ML/AI", "Cloud", "Databases", "Big Data"]
        );
    }

    #[test]
    fn test_project_without_technologies_is_rejected() {
        static BROKEN: &[Project] = &[Project {
            title: "Untitled",
            description: "Nothing yet",
            technologies: &[],
            impact: None,
            category: "Misc",
        }];
        let mut data = portfolio();
        data.open_source_projects = BROKEN;
        let err = validate_dataset(&data).unwrap_err();
        assert!(err.to_string().contains("open_source_projects[0].technologies"));
    }

    #[test]
    fn test_dataset_json_is_a_single_document() {
        let json = dataset_json().unwrap();
        assert!(json.starts_with('{'));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["skills"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_dataset_serializes_to_json() {
        let json = serde_json::to_value(portfolio()).unwrap();
        assert_eq!(json["profile"]["email"], "basheerahmedshk@gmail.com");
        assert_eq!(json["open_source_projects"][0]["impact"], serde_json::Value::Null);
    }
}
