//! LaTeX résumé document builder.
//!
//! Produces a single-page article-class document from the profile. All
//! user-supplied text is escaped before insertion; the document must stay
//! valid LaTeX whatever the profile contains.

use crate::errors::AppError;
use crate::profile::UserProfile;

const CV_TEMPLATE: &str = r"\documentclass[10pt, letterpaper]{article}
\usepackage[top=2cm,bottom=2cm,left=2cm,right=2cm,footskip=1.0cm]{geometry}
\usepackage{titlesec}
\usepackage[dvipsnames]{xcolor}
\definecolor{primaryColor}{RGB}{0, 79, 144}
\usepackage{enumitem}
\usepackage{hyperref}
\usepackage{lastpage}
\pagestyle{empty}
\setlength{\parindent}{0pt}
\titleformat{\section}{\bfseries\large}{}{0pt}{}[\vspace{1pt}\titlerule]
\titlespacing{\section}{-1pt}{0.3cm}{0.2cm}
\begin{document}
\begin{center}
    \textbf{\fontsize{24pt}{24pt}\selectfont {name}} \\
    \vspace{0.3cm}
    \normalsize
    {address} \quad | \quad
    \href{mailto:{email}}{{email}} \quad | \quad
    \href{tel:{phone}}{{phone}}
\end{center}
\vspace{0.3cm}
\section{Education}
\textbf{{qualification}} \\
\vspace{0.1cm}
\begin{itemize}
{education_items}
\end{itemize}
\section{Experience}
\textbf{Job Seeker} \\
\textit{{industries}} \\
\vspace{0.1cm}
\begin{itemize}
{experience_items}
\end{itemize}
\section{Technologies}
\textbf{Skills:} {skills} \\
\textbf{Industries:} {industries}
\end{document}
";

/// Builds the résumé document. Name, qualification, address, and mobile
/// number are required; everything else degrades gracefully.
pub fn build_document(profile: &UserProfile) -> Result<String, AppError> {
    let name = required(&profile.name, "name")?;
    let qualification = required(&profile.qualification, "qualification")?;
    let address = required(&profile.address, "address")?;
    let phone = required(&profile.mobile_number, "mobile number")?;

    let email = if profile.email.trim().is_empty() {
        "example@email.com"
    } else {
        profile.email.trim()
    };

    Ok(CV_TEMPLATE
        .replace("{name}", &escape(&name.to_uppercase()))
        .replace("{address}", &escape(address))
        .replace("{email}", &escape(email))
        .replace("{phone}", &escape(phone))
        .replace("{qualification}", &escape(qualification))
        .replace("{education_items}", &education_items(profile))
        .replace("{experience_items}", &experience_items(profile))
        .replace("{industries}", &escape(&profile.industries.join(", ")))
        .replace("{skills}", &escape(&profile.skills.join(", "))))
}

fn required<'a>(value: &'a str, field: &str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(AppError::Validation(format!(
            "Profile field '{field}' is required for CV generation"
        )))
    } else {
        Ok(trimmed)
    }
}

fn education_items(profile: &UserProfile) -> String {
    if profile.education.is_empty() {
        return r"    \item Relevant education based on profile.".to_string();
    }
    profile
        .education
        .iter()
        .map(|entry| {
            format!(
                r"    \item {}, {} ({})",
                escape(&entry.degree),
                escape(&entry.institution),
                escape(&entry.year)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn experience_items(profile: &UserProfile) -> String {
    if profile.experience.is_empty() {
        return r"    \item Actively seeking opportunities in preferred industries.".to_string();
    }
    profile
        .experience
        .iter()
        .map(|entry| {
            format!(
                r"    \item {}, {} ({})",
                escape(&entry.role),
                escape(&entry.organization),
                escape(&entry.duration)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escapes LaTeX special characters in user-supplied text.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
