use crate::formatter::MarkdownContent;
use crate::types::{OrgMember, OrgName};

pub fn org_member_list_markdown(orgname: &OrgName, members: &[OrgMember]) -> MarkdownContent {
    let mut content = String::new();

    content.push_str(&format!("## Members of {}\n", orgname));
    if members.is_empty() {
        content.push_str("No members found\n");
        return MarkdownContent(content);
    }

    for member in members {
        match &member.html_url {
            Some(url) => content.push_str(&format!("- {} ({})\n", member.login, url)),
            None => content.push_str(&format!("- {}\n", member.login)),
        }
    }

    MarkdownContent(content)
}
