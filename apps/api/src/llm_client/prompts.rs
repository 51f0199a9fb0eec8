// Prompt templates and response schemas for the resume assistant.
// Schemas use the generative-language API's OpenAPI subset (uppercase type names).

use serde_json::{json, Value};

pub const PARSING_TASK: &str = "The user has uploaded an existing resume. EXTRACT all information \
    from the provided document accurately into the JSON structure. Polish the summary and \
    experience bullet points to be more professional and action-oriented immediately.";

pub const INTERVIEW_TASK: &str = "You are interviewing the user to build their resume. Analyze \
    their input and update the JSON structure.";

pub const RESUME_PROMPT_TEMPLATE: &str = r#"You are an expert Resume Architect AI.

TASK:
{task}

CURRENT RESUME STATE:
{resume_json}

USER INPUT:
"{user_message}"

INSTRUCTIONS:
1. Update the 'updatedResume' object.
2. If extracting from a file, ensure no data is lost. Map fields intelligently.
3. Improve phrasing to be professional (Action Verb + Task + Result).
4. Generate a helpful 'chatResponse'.
5. Provide 'suggestions' for next steps."#;

pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"You are a professional career coach.

TASK:
Write a compelling, concise cover letter for the position of "{job_title}" at "{company_name}".

SOURCE MATERIAL:
Use the attached resume to extract relevant skills, experience, and achievements that match this role.

TONE:
Professional, enthusiastic, and confident. Keep it under 250 words.

OUTPUT:
Return strictly JSON with the cover letter text."#;

pub const FALLBACK_COVER_LETTER: &str = "Dear Hiring Manager,\n\nI am writing to express my \
    interest in this position. Please find my resume attached.\n\nSincerely,\nCandidate";

pub fn build_resume_prompt(parsing: bool, resume_json: &str, user_message: &str) -> String {
    fill_template(
        RESUME_PROMPT_TEMPLATE,
        &[
            ("{task}", if parsing { PARSING_TASK } else { INTERVIEW_TASK }),
            ("{resume_json}", resume_json),
            ("{user_message}", user_message),
        ],
    )
}

pub fn build_cover_letter_prompt(job_title: &str, company_name: &str) -> String {
    fill_template(
        COVER_LETTER_PROMPT_TEMPLATE,
        &[("{job_title}", job_title), ("{company_name}", company_name)],
    )
}

/// Single left-to-right pass over the template. Substituted text is never
/// scanned again, so placeholders inside user input stay literal.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some((pos, placeholder, value)) = values
        .iter()
        .filter_map(|&(placeholder, value)| {
            rest.find(placeholder).map(|pos| (pos, placeholder, value))
        })
        .min_by_key(|&(pos, _, _)| pos)
    {
        out.push_str(&rest[..pos]);
        out.push_str(value);
        rest = &rest[pos + placeholder.len()..];
    }
    out.push_str(rest);
    out
}

pub fn resume_response_schema() -> Value {
    let string = json!({ "type": "STRING" });
    let string_list = json!({ "type": "ARRAY", "items": { "type": "STRING" } });

    json!({
        "type": "OBJECT",
        "properties": {
            "chatResponse": {
                "type": "STRING",
                "description": "A conversational response. If parsing a resume, say you analyzed it and ask what to improve. If building, ask for the next missing piece of information."
            },
            "suggestions": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of 3-4 short, actionable text suggestions."
            },
            "updatedResume": {
                "type": "OBJECT",
                "description": "The complete updated resume data structure.",
                "properties": {
                    "fullName": string,
                    "title": { "type": "STRING", "description": "Professional job title" },
                    "email": string,
                    "phone": string,
                    "location": string,
                    "summary": { "type": "STRING", "description": "A professional summary (2-3 sentences)" },
                    "experience": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "id": { "type": "STRING", "description": "Unique ID (can be generated)" },
                                "title": string,
                                "company": string,
                                "dates": string,
                                "description": {
                                    "type": "ARRAY",
                                    "items": { "type": "STRING" },
                                    "description": "List of bullet points for achievements/responsibilities"
                                }
                            }
                        }
                    },
                    "education": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "id": string,
                                "school": string,
                                "degree": string,
                                "dates": string,
                                "details": string
                            }
                        }
                    },
                    "skills": string_list
                },
                "required": ["fullName", "experience", "education", "skills"]
            }
        },
        "required": ["chatResponse", "updatedResume", "suggestions"]
    })
}

pub fn cover_letter_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "coverLetter": {
                "type": "STRING",
                "description": "A professional, concise cover letter (approx 200 words) tailored to the specific job and company, highlighting relevant skills from the resume."
            }
        },
        "required": ["coverLetter"]
    })
}
