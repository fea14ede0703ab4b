use std::fmt::Write;

use crate::models::resume::{filled_with_position, is_blank};
use crate::models::{EducationEntry, ExperienceEntry, ResumeData};
use crate::persistence::transfer::sanitize_file_stem;

const STYLESHEET: &str = r#"
  body { margin: 0; background: #ffffff; color: #333333; font-family: Arial, sans-serif; }
  .resume { width: 800px; padding: 40px; box-sizing: border-box; }
  .resume-inner { max-width: 600px; margin: 0 auto; }
  header { text-align: center; margin-bottom: 30px; padding-bottom: 20px; border-bottom: 2px solid #333333; }
  header h1 { font-size: 28px; margin: 0 0 10px 0; }
  .contact { display: flex; flex-wrap: wrap; justify-content: center; gap: 15px; font-size: 14px; color: #666666; }
  section { margin-bottom: 25px; }
  section h2 { font-size: 20px; margin: 0 0 15px 0; padding-bottom: 5px; border-bottom: 1px solid #dddddd; }
  .entry { margin-bottom: 15px; }
  .entry-head { display: flex; justify-content: space-between; align-items: flex-start; }
  .entry h3 { font-size: 16px; margin: 0 0 5px 0; }
  .muted { margin: 0; color: #666666; font-size: 14px; }
  .description { margin: 8px 0 0 0; color: #555555; line-height: 1.5; font-size: 14px; }
  .skills { display: flex; flex-wrap: wrap; gap: 8px; }
  .skill { background: #f0f0f0; padding: 6px 12px; border-radius: 20px; font-size: 13px; }
"#;

/// Renders the resume as a standalone HTML document.
///
/// Only filled entries are listed and a section with none is left out entirely.
pub fn render_resume_html(resume: &ResumeData) -> String {
    let info = &resume.personal_info;
    let display_name = if is_blank(&info.name) {
        "Your Name"
    } else {
        info.name.as_str()
    };

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(display_name));
    let _ = writeln!(html, "<style>{STYLESHEET}</style>");
    html.push_str("</head>\n<body>\n<div class=\"resume\"><div class=\"resume-inner\">\n");

    html.push_str("<header>\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape_html(display_name));
    html.push_str("<div class=\"contact\">");
    for value in [&info.email, &info.phone, &info.address] {
        if !is_blank(value) {
            let _ = write!(html, "<span>{}</span>", escape_html(value));
        }
    }
    html.push_str("</div>\n</header>\n");

    render_education(&resume.education, &mut html);
    render_experience(&resume.experience, &mut html);
    render_skills(&resume.skills, &mut html);

    html.push_str("</div></div>\n</body>\n</html>\n");
    html
}

fn render_education(entries: &[EducationEntry], html: &mut String) {
    let mut filled = filled_with_position(entries).peekable();
    if filled.peek().is_none() {
        return;
    }
    html.push_str("<section class=\"education\">\n<h2>Education</h2>\n");
    for (_, edu) in filled {
        html.push_str("<div class=\"entry\"><div class=\"entry-head\"><div>");
        let _ = write!(
            html,
            "<h3>{}</h3><p class=\"muted\">{}</p></div><span class=\"muted\">{}</span>",
            escape_html(&edu.degree),
            escape_html(&edu.school),
            escape_html(&edu.year)
        );
        html.push_str("</div></div>\n");
    }
    html.push_str("</section>\n");
}

fn render_experience(entries: &[ExperienceEntry], html: &mut String) {
    let mut filled = filled_with_position(entries).peekable();
    if filled.peek().is_none() {
        return;
    }
    html.push_str("<section class=\"experience\">\n<h2>Work Experience</h2>\n");
    for (_, exp) in filled {
        html.push_str("<div class=\"entry\"><div class=\"entry-head\">");
        let _ = write!(
            html,
            "<h3>{}</h3><span class=\"muted\">{}</span></div><p class=\"muted\">{}</p>",
            escape_html(&exp.position),
            escape_html(&exp.duration),
            escape_html(&exp.company)
        );
        if !is_blank(&exp.description) {
            let _ = write!(
                html,
                "<p class=\"description\">{}</p>",
                escape_html(&exp.description)
            );
        }
        html.push_str("</div>\n");
    }
    html.push_str("</section>\n");
}

fn render_skills(skills: &[String], html: &mut String) {
    let mut filled = filled_with_position(skills).peekable();
    if filled.peek().is_none() {
        return;
    }
    html.push_str("<section class=\"skills-section\">\n<h2>Skills</h2>\n<div class=\"skills\">");
    for (_, skill) in filled {
        let _ = write!(html, "<span class=\"skill\">{}</span>", escape_html(skill.trim()));
    }
    html.push_str("</div>\n</section>\n");
}

/// `<sanitized name>.pdf`, or `Resume.pdf` for a blank name.
pub fn pdf_filename(name: &str) -> String {
    format!("{}.pdf", sanitize_file_stem(name))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
