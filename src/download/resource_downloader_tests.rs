#[cfg(test)]
mod tests {
    use crate::console::Console;
    use crate::download::resource_downloader::file_name;
    use crate::download::{
        Credentials, DownloadOptions, HttpResponse, HttpSession, ProgressReporter,
        ResourceDownloader,
    };
    use crate::error::{OdlError, Result};
    use crate::models::{AcceptCookie, Arch, Resource};
    use std::collections::VecDeque;
    use std::fs;
    use std::io::{Cursor, Read};
    use std::sync::{Arc, Mutex};
    use tempfile::tempdir;
    use url::Url;

    const LOGIN_URL: &str = "https://login.example.com/sso/auth";

    const SIGN_IN_PAGE: &str = r#"<html><body>
        <form method="post">
          <input type="hidden" name="OAM_REQ" value="req-123">
          <input type="hidden" name="site2pstoretoken" value="tok-456">
          <input type="text" name="username">
          <input type="password" name="password">
        </form>
    </body></html>"#;

    type Log = Arc<Mutex<Vec<String>>>;

    struct MockResponse {
        status: u16,
        body: Vec<u8>,
    }

    fn ok(body: &[u8]) -> MockResponse {
        MockResponse {
            status: 200,
            body: body.to_vec(),
        }
    }

    struct MockSession {
        responses: VecDeque<MockResponse>,
        log: Log,
    }

    impl MockSession {
        fn new(responses: Vec<MockResponse>, log: &Log) -> Self {
            Self {
                responses: responses.into(),
                log: Arc::clone(log),
            }
        }

        fn next(&mut self, url: &Url) -> Result<Box<dyn HttpResponse>> {
            let response = self
                .responses
                .pop_front()
                .ok_or_else(|| OdlError::NetworkError("No more mock responses".to_string()))?;

            Ok(Box::new(MockHttpResponse {
                status: response.status,
                length: response.body.len().to_string(),
                url: url.to_string(),
                body: Cursor::new(response.body),
            }))
        }
    }

    impl HttpSession for MockSession {
        fn seed_cookie(&mut self, url: &Url, cookie: &AcceptCookie) -> Result<()> {
            self.log
                .lock()
                .unwrap()
                .push(format!("COOKIE {url} {}={}", cookie.name, cookie.value));
            Ok(())
        }

        fn get(&mut self, url: &Url) -> Result<Box<dyn HttpResponse>> {
            self.log.lock().unwrap().push(format!("GET {url}"));
            self.next(url)
        }

        fn post_form(&mut self, url: &Url, encoded_form: &str) -> Result<Box<dyn HttpResponse>> {
            self.log
                .lock()
                .unwrap()
                .push(format!("POST {url} {encoded_form}"));
            self.next(url)
        }
    }

    struct MockHttpResponse {
        status: u16,
        length: String,
        url: String,
        body: Cursor<Vec<u8>>,
    }

    impl Read for MockHttpResponse {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.body.read(buf)
        }
    }

    impl HttpResponse for MockHttpResponse {
        fn status(&self) -> u16 {
            self.status
        }

        fn header(&self, name: &str) -> Option<&str> {
            name.eq_ignore_ascii_case("Content-Length")
                .then_some(self.length.as_str())
        }

        fn final_url(&self) -> &str {
            &self.url
        }
    }

    struct ScriptedConsole {
        overwrite_answers: VecDeque<bool>,
        password: String,
        log: Log,
    }

    impl ScriptedConsole {
        fn new(log: &Log) -> Self {
            Self {
                overwrite_answers: VecDeque::new(),
                password: "prompted-secret".to_string(),
                log: Arc::clone(log),
            }
        }

        fn answering(mut self, answers: &[bool]) -> Self {
            self.overwrite_answers = answers.iter().copied().collect();
            self
        }
    }

    impl Console for ScriptedConsole {
        fn confirm_overwrite(&mut self, file_name: &str) -> Result<bool> {
            self.log
                .lock()
                .unwrap()
                .push(format!("ASK OVERWRITE {file_name}"));
            Ok(self.overwrite_answers.pop_front().unwrap_or(false))
        }

        fn read_password(&mut self, username: &str) -> Result<String> {
            self.log
                .lock()
                .unwrap()
                .push(format!("ASK PASSWORD {username}"));
            Ok(self.password.clone())
        }
    }

    struct RecordingReporter {
        log: Log,
    }

    impl ProgressReporter for RecordingReporter {
        fn on_start(&mut self, file_name: &str, total_bytes: u64) {
            self.log
                .lock()
                .unwrap()
                .push(format!("START {file_name} {total_bytes}"));
        }

        fn on_progress(&mut self, bytes_downloaded: u64) {
            self.log
                .lock()
                .unwrap()
                .push(format!("PROGRESS {bytes_downloaded}"));
        }

        fn on_complete(&mut self) {
            self.log.lock().unwrap().push("COMPLETE".to_string());
        }

        fn on_error(&mut self, message: &str) {
            self.log.lock().unwrap().push(format!("ERROR {message}"));
        }
    }

    fn resource(files: &[&str], skip_auth: bool) -> Resource {
        Resource {
            component: "db".to_string(),
            version: "12cEE".to_string(),
            files: files.iter().map(|f| f.to_string()).collect(),
            license_url: "https://www.oracle.com/license.html".to_string(),
            os: "linux".to_string(),
            arch: Arch::X64,
            lang: "na".to_string(),
            skip_auth,
            accept_cookie: AcceptCookie::new("oraclelicense", "accept-dbindex-cookie", ".oracle.com"),
        }
    }

    fn credentials() -> Credentials {
        Credentials::new("scott@example.com", Some("tiger".to_string()))
    }

    fn requests(log: &Log) -> Vec<String> {
        log.lock()
            .unwrap()
            .iter()
            .filter(|entry| entry.starts_with("GET ") || entry.starts_with("POST "))
            .cloned()
            .collect()
    }

    const PART1: &str = "https://edelivery.oracle.com/otn/db_1of2.zip";
    const PART2: &str = "https://edelivery.oracle.com/otn/db_2of2.zip";

    #[test]
    fn test_file_name_is_last_path_segment() {
        let url = Url::parse(
            "https://edelivery.oracle.com/akam/otn/java/sqldeveloper/sqlcl-4.2.0.16.355.0402-no-jre.zip",
        )
        .unwrap();
        assert_eq!(
            file_name(&url).unwrap(),
            "sqlcl-4.2.0.16.355.0402-no-jre.zip"
        );

        let directory = Url::parse("https://edelivery.oracle.com/akam/").unwrap();
        assert!(matches!(
            file_name(&directory),
            Err(OdlError::NetworkError(_))
        ));
    }

    #[test]
    fn test_sign_in_happens_once_for_multi_file_resource() {
        let log = Log::default();
        let session = MockSession::new(
            vec![ok(SIGN_IN_PAGE.as_bytes()), ok(b"part one"), ok(b"part two")],
            &log,
        );
        let mut downloader = ResourceDownloader::new(
            Box::new(session),
            Box::new(ScriptedConsole::new(&log)),
        )
        .with_login_url(LOGIN_URL);

        let dir = tempdir().unwrap();
        let options = DownloadOptions {
            destination: dir.path().to_path_buf(),
            skip_existing: false,
        };

        let summary = downloader
            .download(&resource(&[PART1, PART2], false), &credentials(), &options)
            .unwrap();

        let requests = requests(&log);
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0], format!("GET {PART1}"));
        assert!(requests[1].starts_with(&format!("POST {LOGIN_URL} ")));
        assert_eq!(requests[2], format!("GET {PART2}"));
        assert_eq!(
            requests.iter().filter(|r| r.starts_with("POST ")).count(),
            1
        );

        assert!(summary.authenticated);
        assert_eq!(summary.downloaded.len(), 2);
        // The sign-in response stands in for the first file
        assert_eq!(fs::read(dir.path().join("db_1of2.zip")).unwrap(), b"part one");
        assert_eq!(fs::read(dir.path().join("db_2of2.zip")).unwrap(), b"part two");
    }

    #[test]
    fn test_sign_in_posts_scraped_fields_and_credentials() {
        let log = Log::default();
        let session = MockSession::new(vec![ok(SIGN_IN_PAGE.as_bytes()), ok(b"zip")], &log);
        let mut downloader = ResourceDownloader::new(
            Box::new(session),
            Box::new(ScriptedConsole::new(&log)),
        )
        .with_login_url(LOGIN_URL);

        let dir = tempdir().unwrap();
        let options = DownloadOptions {
            destination: dir.path().to_path_buf(),
            skip_existing: false,
        };
        downloader
            .download(&resource(&[PART1], false), &credentials(), &options)
            .unwrap();

        let post = requests(&log)
            .into_iter()
            .find(|r| r.starts_with("POST "))
            .unwrap();
        assert_eq!(
            post,
            format!(
                "POST {LOGIN_URL} OAM_REQ=req-123&password=tiger&site2pstoretoken=tok-456&username=scott%40example.com"
            )
        );
    }

    #[test]
    fn test_cookie_seeded_before_each_request() {
        let log = Log::default();
        let session = MockSession::new(vec![ok(b"one"), ok(b"two")], &log);
        let mut downloader = ResourceDownloader::new(
            Box::new(session),
            Box::new(ScriptedConsole::new(&log)),
        );

        let dir = tempdir().unwrap();
        let options = DownloadOptions {
            destination: dir.path().to_path_buf(),
            skip_existing: false,
        };
        downloader
            .download(&resource(&[PART1, PART2], true), &credentials(), &options)
            .unwrap();

        let log = log.lock().unwrap();
        assert_eq!(
            *log,
            vec![
                format!("COOKIE {PART1} oraclelicense=accept-dbindex-cookie"),
                format!("GET {PART1}"),
                format!("COOKIE {PART2} oraclelicense=accept-dbindex-cookie"),
                format!("GET {PART2}"),
            ]
        );
    }

    #[test]
    fn test_skip_auth_writes_get_response() {
        let log = Log::default();
        let session = MockSession::new(vec![ok(b"public bytes")], &log);
        let mut downloader = ResourceDownloader::new(
            Box::new(session),
            Box::new(ScriptedConsole::new(&log)),
        );

        let dir = tempdir().unwrap();
        let options = DownloadOptions {
            destination: dir.path().to_path_buf(),
            skip_existing: false,
        };
        let summary = downloader
            .download(
                &resource(&[PART1], true),
                &Credentials::new("scott", None),
                &options,
            )
            .unwrap();

        assert!(!summary.authenticated);
        assert_eq!(requests(&log), vec![format!("GET {PART1}")]);
        assert!(!log.lock().unwrap().iter().any(|e| e.starts_with("ASK PASSWORD")));
        assert_eq!(
            fs::read(dir.path().join("db_1of2.zip")).unwrap(),
            b"public bytes"
        );
    }

    #[test]
    fn test_skip_existing_makes_no_request() {
        let log = Log::default();
        let session = MockSession::new(vec![], &log);
        let mut downloader = ResourceDownloader::new(
            Box::new(session),
            Box::new(ScriptedConsole::new(&log)),
        );

        let dir = tempdir().unwrap();
        let existing = dir.path().join("db_1of2.zip");
        fs::write(&existing, b"already here").unwrap();

        let options = DownloadOptions {
            destination: dir.path().to_path_buf(),
            skip_existing: true,
        };
        let summary = downloader
            .download(&resource(&[PART1], false), &credentials(), &options)
            .unwrap();

        assert!(log.lock().unwrap().is_empty());
        assert_eq!(summary.skipped, vec![existing.clone()]);
        assert!(summary.downloaded.is_empty());
        assert_eq!(fs::read(&existing).unwrap(), b"already here");
    }

    #[test]
    fn test_declined_overwrite_skips_file() {
        let log = Log::default();
        let session = MockSession::new(vec![], &log);
        let console = ScriptedConsole::new(&log).answering(&[false]);
        let mut downloader = ResourceDownloader::new(Box::new(session), Box::new(console));

        let dir = tempdir().unwrap();
        let existing = dir.path().join("db_1of2.zip");
        fs::write(&existing, b"keep me").unwrap();

        let options = DownloadOptions {
            destination: dir.path().to_path_buf(),
            skip_existing: false,
        };
        let summary = downloader
            .download(&resource(&[PART1], false), &credentials(), &options)
            .unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec!["ASK OVERWRITE db_1of2.zip".to_string()]
        );
        assert_eq!(summary.skipped.len(), 1);
        assert_eq!(fs::read(&existing).unwrap(), b"keep me");
    }

    #[test]
    fn test_accepted_overwrite_replaces_file() {
        let log = Log::default();
        let session = MockSession::new(vec![ok(b"fresh")], &log);
        let console = ScriptedConsole::new(&log).answering(&[true]);
        let mut downloader = ResourceDownloader::new(Box::new(session), Box::new(console));

        let dir = tempdir().unwrap();
        let existing = dir.path().join("db_1of2.zip");
        fs::write(&existing, b"stale contents that are longer").unwrap();

        let options = DownloadOptions {
            destination: dir.path().to_path_buf(),
            skip_existing: false,
        };
        downloader
            .download(&resource(&[PART1], true), &credentials(), &options)
            .unwrap();

        assert_eq!(fs::read(&existing).unwrap(), b"fresh");
    }

    #[test]
    fn test_sign_in_moves_to_first_requested_file() {
        let log = Log::default();
        let session = MockSession::new(vec![ok(SIGN_IN_PAGE.as_bytes()), ok(b"second")], &log);
        let mut downloader = ResourceDownloader::new(
            Box::new(session),
            Box::new(ScriptedConsole::new(&log)),
        )
        .with_login_url(LOGIN_URL);

        let dir = tempdir().unwrap();
        fs::write(dir.path().join("db_1of2.zip"), b"first").unwrap();

        let options = DownloadOptions {
            destination: dir.path().to_path_buf(),
            skip_existing: true,
        };
        let summary = downloader
            .download(&resource(&[PART1, PART2], false), &credentials(), &options)
            .unwrap();

        let requests = requests(&log);
        assert_eq!(requests[0], format!("GET {PART2}"));
        assert!(requests[1].starts_with("POST "));
        assert!(summary.authenticated);
        assert_eq!(fs::read(dir.path().join("db_2of2.zip")).unwrap(), b"second");
    }

    #[test]
    fn test_password_prompted_only_when_missing() {
        let log = Log::default();
        let session = MockSession::new(
            vec![ok(SIGN_IN_PAGE.as_bytes()), ok(b"1"), ok(b"2")],
            &log,
        );
        let mut downloader = ResourceDownloader::new(
            Box::new(session),
            Box::new(ScriptedConsole::new(&log)),
        )
        .with_login_url(LOGIN_URL);

        let dir = tempdir().unwrap();
        let options = DownloadOptions {
            destination: dir.path().to_path_buf(),
            skip_existing: false,
        };
        downloader
            .download(
                &resource(&[PART1, PART2], false),
                &Credentials::new("scott", None),
                &options,
            )
            .unwrap();

        let log = log.lock().unwrap();
        assert_eq!(
            log.iter().filter(|e| *e == "ASK PASSWORD scott").count(),
            1
        );
        let post = log.iter().find(|e| e.starts_with("POST ")).unwrap();
        assert!(post.contains("password=prompted-secret"));
    }

    #[test]
    fn test_error_status_aborts_without_writing() {
        let log = Log::default();
        let session = MockSession::new(
            vec![MockResponse {
                status: 404,
                body: b"not found".to_vec(),
            }],
            &log,
        );
        let mut downloader = ResourceDownloader::new(
            Box::new(session),
            Box::new(ScriptedConsole::new(&log)),
        );

        let dir = tempdir().unwrap();
        let options = DownloadOptions {
            destination: dir.path().to_path_buf(),
            skip_existing: false,
        };
        let result = downloader.download(&resource(&[PART1, PART2], true), &credentials(), &options);

        assert!(matches!(result, Err(OdlError::NetworkError(_))));
        assert!(!dir.path().join("db_1of2.zip").exists());
        assert_eq!(requests(&log).len(), 1);
    }

    #[test]
    fn test_transport_failure_is_fatal() {
        let log = Log::default();
        let session = MockSession::new(vec![ok(b"one")], &log);
        let mut downloader = ResourceDownloader::new(
            Box::new(session),
            Box::new(ScriptedConsole::new(&log)),
        );

        let dir = tempdir().unwrap();
        let options = DownloadOptions {
            destination: dir.path().to_path_buf(),
            skip_existing: false,
        };
        let result = downloader.download(&resource(&[PART1, PART2], true), &credentials(), &options);

        assert!(result.is_err());
        // Files written before the failure stay on disk
        assert_eq!(fs::read(dir.path().join("db_1of2.zip")).unwrap(), b"one");
    }

    #[test]
    fn test_page_without_form_is_a_parse_error() {
        let log = Log::default();
        let session = MockSession::new(vec![ok(b"<html><body>Down for maintenance</body></html>")], &log);
        let mut downloader = ResourceDownloader::new(
            Box::new(session),
            Box::new(ScriptedConsole::new(&log)),
        )
        .with_login_url(LOGIN_URL);

        let dir = tempdir().unwrap();
        let options = DownloadOptions {
            destination: dir.path().to_path_buf(),
            skip_existing: false,
        };
        let result = downloader.download(&resource(&[PART1], false), &credentials(), &options);

        assert!(matches!(result, Err(OdlError::LoginForm(_))));
        assert!(!requests(&log).iter().any(|r| r.starts_with("POST ")));
    }

    #[test]
    fn test_missing_destination_directory_is_fatal() {
        let log = Log::default();
        let session = MockSession::new(vec![ok(b"bytes")], &log);
        let mut downloader = ResourceDownloader::new(
            Box::new(session),
            Box::new(ScriptedConsole::new(&log)),
        )
        .with_progress_reporter(Box::new(RecordingReporter {
            log: Arc::clone(&log),
        }));

        let dir = tempdir().unwrap();
        let options = DownloadOptions {
            destination: dir.path().join("missing"),
            skip_existing: false,
        };
        let result = downloader.download(&resource(&[PART1], true), &credentials(), &options);

        assert!(matches!(result, Err(OdlError::Io(_))));
        assert!(log.lock().unwrap().iter().any(|e| e.starts_with("ERROR ")));
    }

    #[test]
    fn test_progress_reported_per_file() {
        let log = Log::default();
        let session = MockSession::new(vec![ok(b"0123456789")], &log);
        let mut downloader = ResourceDownloader::new(
            Box::new(session),
            Box::new(ScriptedConsole::new(&log)),
        )
        .with_progress_reporter(Box::new(RecordingReporter {
            log: Arc::clone(&log),
        }));

        let dir = tempdir().unwrap();
        let options = DownloadOptions {
            destination: dir.path().to_path_buf(),
            skip_existing: false,
        };
        downloader
            .download(&resource(&[PART1], true), &credentials(), &options)
            .unwrap();

        let log = log.lock().unwrap();
        let progress: Vec<&String> = log
            .iter()
            .filter(|e| {
                e.starts_with("START") || e.starts_with("PROGRESS") || e.starts_with("COMPLETE")
            })
            .collect();
        assert_eq!(progress, vec!["START db_1of2.zip 10", "PROGRESS 10", "COMPLETE"]);
    }
}
