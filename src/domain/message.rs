use super::Article;

const TAGS: &str = "#fashion #style";

/// Chat-ready rendering of one article
#[derive(Debug, Clone)]
pub struct ArticleMessage {
    pub title: String,
    pub summary: String,
    pub source: String,
    pub link: String,
}

impl ArticleMessage {
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            summary: article.summary.clone(),
            source: article.source.clone(),
            link: article.link.clone(),
        }
    }

    /// Markdown body: bold title, summary, source, link, tags
    pub fn format(&self) -> String {
        let mut message = format!("**{}**\n\n", self.title);

        if !self.summary.is_empty() {
            message.push_str(&self.summary);
            message.push_str("\n\n");
        }

        message.push_str(&format!("Source: {}\n", self.source));

        if !self.link.is_empty() {
            message.push_str(&format!("[Read the article]({})\n", self.link));
        }

        message.push('\n');
        message.push_str(TAGS);
        message
    }

    /// Bare fallback when the rich message can't be delivered
    pub fn format_plain(&self) -> String {
        if self.link.is_empty() {
            return self.title.clone();
        }
        format!("{}\n{}", self.title, self.link)
    }
}
