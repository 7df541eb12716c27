use crate::formatter::{MarkdownContent, format_date};
use crate::types::{UserProfile, Username};

pub fn user_profile_markdown(profile: &UserProfile) -> MarkdownContent {
    let mut content = String::new();

    content.push_str(&format!("# {}\n", profile.login));
    if let Some(name) = &profile.name {
        content.push_str(&format!("{}\n", name));
    }
    content.push('\n');

    content.push_str("## Profile\n");
    content.push_str(&format!("- URL: {}\n", profile.html_url));
    if let Some(company) = &profile.company {
        content.push_str(&format!("- Company: {}\n", company));
    }
    if let Some(location) = &profile.location {
        content.push_str(&format!("- Location: {}\n", location));
    }
    if let Some(blog) = &profile.blog {
        if !blog.is_empty() {
            content.push_str(&format!("- Blog: {}\n", blog));
        }
    }
    if let Some(email) = &profile.email {
        content.push_str(&format!("- Email: {}\n", email));
    }
    content.push_str(&format!(
        "- Public repositories: {}\n",
        profile.public_repos
    ));
    content.push_str(&format!(
        "- Followers: {} / Following: {}\n",
        profile.followers, profile.following
    ));
    content.push_str(&format!("- Joined: {}\n", format_date(profile.created_at)));

    if let Some(bio) = &profile.bio {
        content.push_str("\n## Bio\n");
        content.push_str(bio);
        content.push('\n');
    }

    MarkdownContent(content)
}

/// Render the recent-search list, most recent first
pub fn search_history_markdown(usernames: &[Username]) -> MarkdownContent {
    let mut content = String::new();

    content.push_str("## Recent searches\n");
    if usernames.is_empty() {
        content.push_str("No searches yet\n");
    } else {
        for username in usernames {
            content.push_str(&format!("- {}\n", username));
        }
    }

    MarkdownContent(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_lists_usernames_in_given_order() {
        let usernames = vec![Username::from("b"), Username::from("a")];
        let content = search_history_markdown(&usernames);
        assert_eq!(content.as_str(), "## Recent searches\n- b\n- a\n");
    }

    #[test]
    fn empty_history_renders_placeholder_line() {
        let content = search_history_markdown(&[]);
        assert!(content.as_str().contains("No searches yet"));
    }
}
