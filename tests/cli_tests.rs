use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SAMPLE_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Harper's Bazaar</title>
    <link>https://www.harpersbazaar.com/</link>
    <item>
      <title>Fall Coats Worth the Investment</title>
      <link>https://www.harpersbazaar.com/fall-coats</link>
      <description><![CDATA[<p>Ten <em>timeless</em> silhouettes.</p>]]></description>
    </item>
    <item>
      <title>Second Story</title>
      <link>https://www.harpersbazaar.com/second</link>
    </item>
  </channel>
</rss>"#;

fn feeder_cmd() -> Command {
    let mut cmd = Command::cargo_bin("fashion-feeder").unwrap();
    for key in [
        "FEEDER_SOURCES",
        "FEEDER_ENTRIES_PER_SOURCE",
        "FEEDER_DEFAULT_COUNT",
        "FEEDER_TIMEOUT_SECS",
        "FEEDER_USER_AGENT",
        "FEEDER_LOG",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

#[test]
fn test_help_lists_commands() {
    feeder_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("latest"))
        .stdout(predicate::str::contains("sources"));
}

#[test]
fn test_latest_help_shows_count_flag() {
    feeder_cmd()
        .arg("latest")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--count"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_sources_lists_default_feeds_in_order() {
    feeder_cmd()
        .arg("sources")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. https://www.vogue.com/feed/rss"))
        .stdout(predicate::str::contains("4. https://www.gq.com/feed/rss"))
        .stdout(predicate::str::contains("Up to 3 articles per feed."));
}

#[test]
fn test_latest_zero_count_reports_nothing_found() {
    feeder_cmd()
        .args(["latest", "--count", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No articles found. Try again later."));
}

#[test]
fn test_latest_with_no_sources_reports_nothing_found() {
    feeder_cmd()
        .arg("latest")
        .env("FEEDER_SOURCES", "")
        .assert()
        .success()
        .stdout(predicate::str::contains("No articles found"));
}

#[test]
fn test_invalid_source_url_fails() {
    feeder_cmd()
        .arg("sources")
        .env("FEEDER_SOURCES", "not-a-url")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid feed URL"));
}

#[test]
fn test_invalid_entries_per_source_fails() {
    feeder_cmd()
        .arg("sources")
        .env("FEEDER_ENTRIES_PER_SOURCE", "none")
        .assert()
        .failure()
        .stderr(predicate::str::contains("FEEDER_ENTRIES_PER_SOURCE"));
}

#[test]
fn test_sources_read_from_dotenv_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".env"),
        "FEEDER_SOURCES=https://a.example.com/rss,https://b.example.com/rss\n",
    )
    .unwrap();

    feeder_cmd()
        .arg("sources")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1. https://a.example.com/rss"))
        .stdout(predicate::str::contains("2. https://b.example.com/rss"))
        .stdout(predicate::str::contains("vogue").not());
}

mod against_local_feeds {
    use super::*;

    #[test]
    fn test_latest_renders_markdown_messages() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/bazaar")
            .with_status(200)
            .with_header("content-type", "application/rss+xml")
            .with_body(SAMPLE_RSS)
            .create();

        feeder_cmd()
            .args(["latest", "--count", "1"])
            .env("FEEDER_SOURCES", format!("{}/bazaar", server.url()))
            .assert()
            .success()
            .stdout(predicate::str::contains("**Fall Coats Worth the Investment**"))
            .stdout(predicate::str::contains("Ten timeless silhouettes."))
            .stdout(predicate::str::contains("Source: Harper's Bazaar"))
            .stdout(predicate::str::contains("Second Story").not());

        mock.assert();
    }

    #[test]
    fn test_latest_json_output() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/bazaar")
            .with_status(200)
            .with_body(SAMPLE_RSS)
            .create();

        feeder_cmd()
            .args(["latest", "--count", "5", "--json"])
            .env("FEEDER_SOURCES", format!("{}/bazaar", server.url()))
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""title": "Second Story""#))
            .stdout(predicate::str::contains(r#""summary": "No description""#));
    }

    #[test]
    fn test_failing_source_still_succeeds() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", "/down").with_status(500).create();

        feeder_cmd()
            .args(["latest", "--plain"])
            .env("FEEDER_SOURCES", format!("{}/down", server.url()))
            .assert()
            .success()
            .stdout(predicate::str::contains("No articles found"));
    }
}
