//! Built-in demo resumes shown on the examples page and used to seed the editor.

use crate::models::resume::{EducationEntry, ExperienceEntry, ResumeDocument};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn experience(id: &str, title: &str, company: &str, dates: &str, bullets: &[&str]) -> ExperienceEntry {
    ExperienceEntry {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        dates: dates.to_string(),
        description: strings(bullets),
    }
}

fn education(id: &str, school: &str, degree: &str, dates: &str, details: Option<&str>) -> EducationEntry {
    EducationEntry {
        id: id.to_string(),
        school: school.to_string(),
        degree: degree.to_string(),
        dates: dates.to_string(),
        details: details.map(str::to_string),
    }
}

pub fn demo_resumes() -> Vec<ResumeDocument> {
    vec![
        ResumeDocument {
            full_name: "Alex Chen".into(),
            title: "Senior Full Stack Engineer".into(),
            email: "alex.chen@example.com".into(),
            phone: "(555) 123-4567".into(),
            location: "San Francisco, CA".into(),
            summary: "Results-driven Senior Full Stack Engineer with 6+ years of experience in \
                building scalable web applications using React, Node.js, and Cloud technologies. \
                Proven track record of optimizing performance and leading agile teams to deliver \
                high-impact products."
                .into(),
            experience: vec![
                experience(
                    "exp-1",
                    "Senior Software Engineer",
                    "TechFlow Solutions",
                    "2021 - Present",
                    &[
                        "Led the migration of a legacy monolith to a microservices architecture, reducing deployment time by 40%.",
                        "Architected and built a high-traffic analytics dashboard using React and D3.js, serving 50k+ daily users.",
                        "Mentored 4 junior developers and established code quality standards across the engineering team.",
                    ],
                ),
                experience(
                    "exp-2",
                    "Software Engineer",
                    "Creative Web Co",
                    "2018 - 2021",
                    &[
                        "Developed and maintained client-facing e-commerce platforms using the MERN stack.",
                        "Implemented CI/CD pipelines using GitHub Actions, increasing release frequency by 300%.",
                        "Collaborated with UX designers to improve accessibility, resulting in a 15% increase in user engagement.",
                    ],
                ),
            ],
            education: vec![education(
                "edu-1",
                "University of California, Berkeley",
                "B.S. Computer Science",
                "2014 - 2018",
                Some("Graduated with Honors, GPA 3.8"),
            )],
            skills: strings(&[
                "React",
                "Node.js",
                "TypeScript",
                "AWS",
                "Docker",
                "GraphQL",
                "PostgreSQL",
                "System Design",
            ]),
            ..Default::default()
        },
        ResumeDocument {
            full_name: "Sarah Jenkins".into(),
            title: "Product Manager".into(),
            email: "sarah.j@example.com".into(),
            phone: "(555) 987-6543".into(),
            location: "New York, NY".into(),
            summary: "Strategic Product Manager with a background in data analytics and a passion \
                for user-centric design. Skilled in roadmap planning, cross-functional leadership, \
                and driving product growth through data-driven decision making."
                .into(),
            experience: vec![
                experience(
                    "exp-1",
                    "Product Manager",
                    "InnovateFin",
                    "2020 - Present",
                    &[
                        "Launched a new mobile banking feature that acquired 100k users in the first 3 months.",
                        "Conducted A/B testing on onboarding flows, increasing conversion rates by 22%.",
                        "Managed a cross-functional team of engineers and designers to deliver quarterly roadmap goals on time.",
                    ],
                ),
                experience(
                    "exp-2",
                    "Associate Product Manager",
                    "StartUp Lyfe",
                    "2018 - 2020",
                    &[
                        "Assisted in the definition of product requirements and user stories for the MVP launch.",
                        "Analyzed user feedback and usage metrics to prioritize backlog items.",
                        "Coordinated go-to-market strategies with the marketing and sales teams.",
                    ],
                ),
            ],
            education: vec![
                education(
                    "edu-1",
                    "New York University",
                    "MBA, Tech Management",
                    "2021 - 2023",
                    None,
                ),
                education("edu-2", "Boston University", "B.A. Economics", "2014 - 2018", None),
            ],
            skills: strings(&[
                "Product Strategy",
                "Agile/Scrum",
                "SQL",
                "Jira",
                "Figma",
                "Data Analysis",
                "User Research",
                "A/B Testing",
            ]),
            ..Default::default()
        },
        ResumeDocument {
            full_name: "Jordan Lee".into(),
            title: "Digital Marketing Specialist".into(),
            email: "jordan.lee@example.com".into(),
            phone: "(555) 456-7890".into(),
            location: "Austin, TX".into(),
            summary: "Creative Digital Marketing Specialist with expertise in SEO, content \
                strategy, and social media management. Adept at creating engaging campaigns that \
                build brand awareness and drive lead generation."
                .into(),
            experience: vec![
                experience(
                    "exp-1",
                    "Marketing Specialist",
                    "Growth Hype Agency",
                    "2019 - Present",
                    &[
                        "Managed ad spend of $50k/month across Facebook and Google Ads, achieving a 3.5x ROAS.",
                        "Developed a content strategy that increased organic blog traffic by 150% YoY.",
                        "Orchestrated email marketing campaigns with an average open rate of 28% and click-through rate of 5%.",
                    ],
                ),
                experience(
                    "exp-2",
                    "Social Media Coordinator",
                    "BrandBuzz",
                    "2017 - 2019",
                    &[
                        "Grew Instagram following from 5k to 50k through organic engagement and influencer partnerships.",
                        "Designed visual assets for social media posts using Adobe Creative Suite.",
                        "Monitored social trends to capitalize on real-time marketing opportunities.",
                    ],
                ),
            ],
            education: vec![education(
                "edu-1",
                "University of Texas at Austin",
                "B.S. Marketing",
                "2013 - 2017",
                None,
            )],
            skills: strings(&[
                "SEO/SEM",
                "Google Analytics",
                "Content Marketing",
                "Social Media Management",
                "Copywriting",
                "Adobe Photoshop",
                "HubSpot",
            ]),
            ..Default::default()
        },
    ]
}
