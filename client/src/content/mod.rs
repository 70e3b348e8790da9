//! Static profile content and the small derivations pages need from it.
//!
//! SYSTEM CONTEXT
//! ==============
//! All copy shown on the site lives in [`site::SITE`]. Pages read it through
//! [`site()`] and never mutate it. Anything a page may have to leave out
//! (project link, avatar, resume) is an `Option`, and the helpers here turn
//! those options into typed render decisions.


mod site;

use serde::Serialize;

pub use site::SITE;

/// The profile shared by every page.
#[must_use]
pub fn site() -> &'static ProfileContent {
    &SITE
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileContent {
    /// Short label for the nav bar.
    pub brand: &'static str,
    /// Hero title.
    pub name: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub email: &'static str,
    pub links: ContactLinks,
    pub location: Option<&'static str>,
    pub gpa: Option<&'static str>,
    pub avatar: Option<Avatar>,
    pub resume_url: Option<&'static str>,
    pub education: Education,
    pub projects: &'static [Project],
    pub skills: &'static [&'static str],
    pub about: AboutContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLinks {
    pub github: Option<&'static str>,
    pub linkedin: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Avatar {
    pub src: &'static str,
    pub src_2x: Option<&'static str>,
    pub alt: &'static str,
}

impl Avatar {
    /// `srcset` value when a high-resolution variant exists.
    #[must_use]
    pub fn srcset(&self) -> Option<String> {
        self.src_2x.map(|hi| format!("{} 1x, {hi} 2x", self.src))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    pub years: &'static str,
    pub coursework: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub link: Option<&'static str>,
}

/// How a project title is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectHeading {
    Linked { title: &'static str, href: &'static str },
    Plain { title: &'static str },
}

impl Project {
    #[must_use]
    pub fn heading(&self) -> ProjectHeading {
        match self.link.filter(|href| !href.trim().is_empty()) {
            Some(href) => ProjectHeading::Linked { title: self.title, href },
            None => ProjectHeading::Plain { title: self.title },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutContent {
    pub intro_title: &'static str,
    pub intro: &'static str,
    pub languages: &'static str,
    pub interests: &'static str,
    pub values: &'static str,
}

impl AboutContent {
    /// Short fact lines in display order.
    #[must_use]
    pub fn facts(&self) -> [&'static str; 3] {
        [self.languages, self.interests, self.values]
    }
}

/// One outbound contact button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactAction {
    pub label: &'static str,
    pub href: String,
    /// Opens in a new browsing context.
    pub external: bool,
}

impl ProfileContent {
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Email first, then whichever profile links are configured.
    #[must_use]
    pub fn contact_actions(&self) -> Vec<ContactAction> {
        let mut actions = vec![ContactAction { label: "Email Me", href: self.mailto(), external: false }];
        if let Some(url) = self.links.github {
            actions.push(ContactAction { label: "GitHub", href: url.to_owned(), external: true });
        }
        if let Some(url) = self.links.linkedin {
            actions.push(ContactAction { label: "LinkedIn", href: url.to_owned(), external: true });
        }
        actions
    }

    /// Location and GPA joined for the hero meta line.
    #[must_use]
    pub fn meta_line(&self) -> Option<String> {
        let gpa = self.gpa.map(|g| format!("GPA {g}"));
        let parts = self.location.map(str::to_owned).into_iter().chain(gpa).collect::<Vec<_>>();
        (!parts.is_empty()).then(|| parts.join(" • "))
    }

    #[must_use]
    pub fn copyright_line(&self, year: i32) -> String {
        format!("© {year} {}. All rights reserved.", self.name)
    }

    /// schema.org `Person` JSON-LD for the document head.
    #[must_use]
    pub fn structured_data(&self) -> serde_json::Value {
        let same_as = [self.links.github, self.links.linkedin]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();
        let person = PersonSchema {
            context: "https://schema.org",
            kind: "Person",
            name: self.name,
            description: self.summary,
            email: self.mailto(),
            address: self.location,
            alumni_of: SchoolSchema { kind: "CollegeOrUniversity", name: self.education.school },
            knows_about: self.skills,
            same_as,
        };
        serde_json::to_value(person).unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PersonSchema<'a> {
    #[serde(rename = "@context")]
    context: &'a str,
    #[serde(rename = "@type")]
    kind: &'a str,
    name: &'a str,
    description: &'a str,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<&'a str>,
    alumni_of: SchoolSchema<'a>,
    knows_about: &'a [&'a str],
    same_as: Vec<&'a str>,
}

#[derive(Serialize)]
struct SchoolSchema<'a> {
    #[serde(rename = "@type")]
    kind: &'a str,
    name: &'a str,
}
