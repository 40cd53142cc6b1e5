//! Static alias configuration.
//!
//! Every key-name alias list in the system lives here as compile-time data:
//! the 13-category section taxonomy, the per-field alias sets used by entry
//! validators and the identity extractor, and the fixed keyword lists. No
//! table is ever modified at runtime.

/// One logical resume section and the key spellings accepted for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionCategory {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

/// The 13 recognized section categories, in detection order.
pub static SECTION_TAXONOMY: &[SectionCategory] = &[
    SectionCategory {
        name: "experience",
        aliases: &[
            "experience", "experiences", "work", "work_history", "workhistory", "employment",
            "employment_history", "jobs", "career", "career_history", "professional_experience",
            "internship", "internships", "work_experience", "workexperience", "job_history",
        ],
    },
    SectionCategory {
        name: "education",
        aliases: &[
            "education", "academics", "academic", "academic_record", "academic_records",
            "academic_details", "qualification", "qualifications", "degrees", "degree",
            "schooling", "education_history", "academic_background",
        ],
    },
    SectionCategory {
        name: "projects",
        aliases: &[
            "projects", "project", "project_experience", "projectexperience", "portfolio",
            "personal_projects", "academic_projects", "works", "case_studies",
        ],
    },
    SectionCategory {
        name: "certifications",
        aliases: &[
            "certifications", "certification", "certificates", "certificate", "certs",
            "credentials", "licenses", "license", "professional_certifications",
        ],
    },
    SectionCategory {
        name: "skills",
        aliases: &[
            "skills", "skillset", "technical_skills", "technologies", "tools", "competencies",
            "expertise", "core_competencies", "tech_stack",
        ],
    },
    SectionCategory {
        name: "languages",
        aliases: &["languages", "language", "spoken_languages"],
    },
    SectionCategory {
        name: "achievements",
        aliases: &[
            "achievements", "awards", "honors", "accomplishments", "recognition", "milestones",
        ],
    },
    SectionCategory {
        name: "publications",
        aliases: &["publications", "papers", "research", "research_work", "journals", "articles"],
    },
    SectionCategory {
        name: "hobbies",
        aliases: &["hobbies", "interests", "extra_curricular", "extracurricular"],
    },
    SectionCategory {
        name: "volunteering",
        aliases: &["volunteering", "volunteer", "community", "social_work", "ngo_work"],
    },
    SectionCategory {
        name: "social_links",
        aliases: &[
            "social_links", "social", "links", "profiles", "urls", "online_presence",
            "online_profiles", "contact_links",
        ],
    },
    SectionCategory {
        name: "references",
        aliases: &["references", "referees"],
    },
    SectionCategory {
        name: "summary",
        aliases: &[
            "summary", "objective", "about", "bio", "profile_summary", "professional_summary",
            "career_objective",
        ],
    },
];

/// The sections that contribute to overall status aggregation.
pub static CORE_SECTIONS: &[&str] = &["experience", "education", "projects", "certifications"];

/// Alias list for a named taxonomy category.
pub fn category_aliases(name: &str) -> &'static [&'static str] {
    SECTION_TAXONOMY.iter().find(|c| c.name == name).map_or(&[], |c| c.aliases)
}

// ─── Identity extraction ────────────────────────────────────────────────────

pub static ID_ALIASES: &[&str] =
    &["candidate_id", "id", "userId", "user_id", "candidateId", "applicant_id"];

pub static NAME_ALIASES: &[&str] =
    &["name", "full_name", "fullName", "candidate_name", "applicant_name"];

pub static FIRST_NAME_ALIASES: &[&str] = &["first_name", "firstname"];

pub static LAST_NAME_ALIASES: &[&str] = &["last_name", "lastname"];

pub static CONTACT_ALIASES: &[&str] = &["contact", "contacts", "basics", "personal_info", "personal"];

/// Exact key names probed inside a located contact object.
pub static CONTACT_EMAIL_KEYS: &[&str] =
    &["email", "emails", "mail", "e-mail", "emailId", "email_id", "gmail"];

/// Exact key names probed inside a located contact object.
pub static CONTACT_PHONE_KEYS: &[&str] = &[
    "phone", "phone_number", "mobile", "contact", "telephone", "tel", "mobile_number", "phone_no",
];

/// Broader document-wide fallbacks when the contact object yields nothing.
pub static EMAIL_ALIASES: &[&str] = &["email", "email_id", "emailId", "mail", "emails", "e-mail"];

pub static PHONE_ALIASES: &[&str] =
    &["phone", "mobile", "phone_number", "telephone", "tel", "contact_number"];

// ─── Experience entries ─────────────────────────────────────────────────────

pub static EXPERIENCE_TITLE_ALIASES: &[&str] =
    &["title", "position", "role", "job_title", "designation", "profile", "jobRole"];

pub static EXPERIENCE_COMPANY_ALIASES: &[&str] =
    &["company", "employer", "organization", "firm", "company_name", "org"];

pub static EXPERIENCE_START_ALIASES: &[&str] =
    &["startDate", "start_date", "from", "start", "joining_date"];

pub static EXPERIENCE_END_ALIASES: &[&str] = &["endDate", "end_date", "to", "end", "leaving_date"];

pub static EXPERIENCE_DESCRIPTION_ALIASES: &[&str] = &["summary", "description", "details", "about"];

pub static EXPERIENCE_HIGHLIGHT_ALIASES: &[&str] =
    &["highlights", "responsibilities", "duties", "points", "tasks"];

/// End-date spellings that mark a still-running engagement.
pub static ONGOING_MARKERS: &[&str] = &["present", "current", "ongoing", "now"];

// ─── Education entries ──────────────────────────────────────────────────────

pub static EDUCATION_DEGREE_ALIASES: &[&str] =
    &["degree", "qualification", "degree_name", "course", "program", "field_of_study"];

pub static EDUCATION_INSTITUTION_ALIASES: &[&str] = &[
    "institution", "school", "college", "university", "institution_name", "institute", "academy",
];

pub static EDUCATION_GRADE_ALIASES: &[&str] =
    &["grade", "gpa", "cgpa", "percentage", "score", "marks", "result"];

pub static EDUCATION_START_ALIASES: &[&str] =
    &["startDate", "start_date", "from", "start", "admission_date"];

pub static EDUCATION_END_ALIASES: &[&str] =
    &["endDate", "end_date", "to", "end", "graduation_date"];

// ─── Project entries ────────────────────────────────────────────────────────

pub static PROJECT_NAME_ALIASES: &[&str] =
    &["name", "title", "project_name", "project_title", "project", "projectName"];

pub static PROJECT_POINT_ALIASES: &[&str] = &["points", "highlights", "bullets"];

pub static PROJECT_DESCRIPTION_ALIASES: &[&str] =
    &["description", "summary", "details", "about", "project_summary"];

pub static PROJECT_TECH_ALIASES: &[&str] = &[
    "technologies", "tech", "tech_stack", "tools", "stack", "built_with", "techstack", "techStack",
];

pub static PROJECT_LINK_ALIASES: &[&str] = &[
    "link", "github", "url", "github_link", "repo", "repository", "repo_link", "github_url",
];

/// A project link may sit one level down, e.g. `{"github_url": "..."}`.
pub static PROJECT_NESTED_LINK_ALIASES: &[&str] = &["github_url", "url", "link"];

/// Technology names scanned for in project text when no explicit stack
/// field is present.
pub static TECH_KEYWORDS: &[&str] = &[
    "python", "java", "c++", "c#", "javascript", "react", "node", "mongodb", "mysql", "django",
    "flask", "spring", "html", "css", "machine learning", "ai", "deep learning", "nlp",
];

// ─── Certification entries ──────────────────────────────────────────────────

pub static CERT_NAME_ALIASES: &[&str] =
    &["name", "certificate", "title", "certificate_name", "cert_name", "credential"];

pub static CERT_ISSUER_ALIASES: &[&str] =
    &["issuer", "organization", "issued_by", "provider", "authority", "platform"];

pub static CERT_URL_ALIASES: &[&str] =
    &["verification_url", "credential_url", "certificate_url", "url", "link"];

// ─── Links ──────────────────────────────────────────────────────────────────

/// Substrings that mark a string leaf as URL-like during link harvesting.
pub static LINK_KEYWORDS: &[&str] = &["http", "www.", ".com", ".io", ".dev", "github", "linkedin"];

/// Named profile fields probed individually by the link validator.
pub static PROFILE_FIELDS: &[&str] = &[
    "linkedin", "github", "portfolio", "website", "youtube", "twitter", "leetcode", "codeforces",
    "codechef", "hackerrank", "stackoverflow", "medium", "blog",
];
