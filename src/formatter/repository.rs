use crate::formatter::{MarkdownContent, format_date};
use crate::types::Repository;

pub fn repository_list_markdown(repositories: &[Repository]) -> MarkdownContent {
    let mut content = String::new();

    content.push_str("## Repositories\n");
    if repositories.is_empty() {
        content.push_str("No repositories found\n");
        return MarkdownContent(content);
    }

    for repository in repositories {
        content.push_str(&format!("\n### {}\n", repository.full_name));
        if let Some(description) = &repository.description {
            content.push_str(&format!("{}\n", description));
        }
        content.push_str(&format!("- URL: {}\n", repository.html_url));
        if let Some(language) = &repository.language {
            content.push_str(&format!("- Language: {}\n", language));
        }
        content.push_str(&format!(
            "- Stars: {} / Forks: {}\n",
            repository.stargazers_count, repository.forks_count
        ));
        if repository.fork {
            content.push_str("- Fork of another repository\n");
        }
        content.push_str(&format!(
            "- Created: {}\n",
            format_date(repository.created_at)
        ));

        content.push_str("\n#### Readme\n");
        content.push_str(repository.readme.text());
        content.push('\n');
    }

    MarkdownContent(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NO_README_FALLBACK, Readme, Repository};

    fn repository(name: &str, readme: Readme) -> Repository {
        let mut repository: Repository = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": name,
            "full_name": format!("octocat/{}", name),
            "owner": {"login": "octocat", "avatar_url": null, "html_url": null},
            "description": "A test repository",
            "html_url": format!("https://github.com/octocat/{}", name),
            "language": "Rust",
            "fork": false,
            "stargazers_count": 2,
            "forks_count": 0,
            "created_at": "2020-01-01T00:00:00Z",
            "updated_at": "2020-06-01T00:00:00Z",
            "pushed_at": null
        }))
        .unwrap();
        repository.readme = readme;
        repository
    }

    #[test]
    fn readme_section_shows_content_or_fallback() {
        let repositories = vec![
            repository("with-readme", Readme::Content("# Hello".to_string())),
            repository("without-readme", Readme::NotFound),
        ];

        let content = repository_list_markdown(&repositories);
        assert!(content.as_str().contains("# Hello"));
        assert!(content.as_str().contains(NO_README_FALLBACK));
    }
}
