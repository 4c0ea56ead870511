use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, headers};

#[test]
fn test_collects_tsx_files_only() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.tsx", "export const A = () => <a />;\n")?;
    test.write_file("b/c.tsx", "export const C = () => <c />;\n")?;
    test.write_file("d.txt", "plain text\n")?;

    let output = test.command().output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let bundle = test.read_output()?;
    assert_eq!(headers(&bundle), vec!["a.tsx", "b/c.tsx"]);
    assert!(!bundle.contains("plain text"));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Collected 2 files into copy-code.txt"));

    Ok(())
}

#[test]
fn test_bundle_layout() -> Result<()> {
    let test = CliTest::with_file(
        "components/theme-provider.tsx",
        r#"export function ThemeProvider({ children }) {
  return <>{children}</>;
}
"#,
    )?;

    let output = test.command().output()?;
    assert!(output.status.success());

    assert_snapshot!(test.read_output()?, @r"
    File: components/theme-provider.tsx
    ================================================================================
    export function ThemeProvider({ children }) {
      return <>{children}</>;
    }

    --------------------------------------------------------------------------------
    ");

    Ok(())
}

#[test]
fn test_rerun_overwrites_output() -> Result<()> {
    let test = CliTest::with_file("app/page.tsx", "export default function Page() {}\n")?;
    test.write_file("copy-code.txt", "left over from a previous run\n")?;

    assert!(test.command().output()?.status.success());
    let first = test.read_output()?;
    assert!(test.command().output()?.status.success());
    let second = test.read_output()?;

    assert!(!first.contains("left over"));
    assert_eq!(first, second);
    assert_eq!(headers(&second), vec!["app/page.tsx"]);

    Ok(())
}

#[test]
fn test_no_matches_creates_empty_output() -> Result<()> {
    let test = CliTest::with_file("lib/utils.ts", "export {};\n")?;

    let output = test.command().output()?;
    assert!(output.status.success());

    assert!(test.root().join("copy-code.txt").exists());
    assert_eq!(test.read_output()?, "");

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Collected 0 files into copy-code.txt"));

    Ok(())
}

#[test]
fn test_unreadable_file_is_recorded_and_run_succeeds() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("broken.tsx", [0xc3u8, 0x28, 0xa0, 0xa1])?;
    test.write_file("ok.tsx", "ok\n")?;

    let output = test.command().output()?;
    assert!(output.status.success());

    let bundle = test.read_output()?;
    assert_eq!(headers(&bundle), vec!["broken.tsx", "ok.tsx"]);
    assert_eq!(
        bundle
            .lines()
            .filter(|l| l.starts_with("Error reading file:"))
            .count(),
        1
    );
    assert!(bundle.contains("ok\n"));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("warning: 1 file could not be read (use -v for details)"));

    Ok(())
}

#[test]
fn test_verbose_reports_each_unreadable_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("nested/broken.tsx", [0xffu8, 0xff])?;

    let output = test.command().arg("--verbose").output()?;
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("warning: Cannot read nested/broken.tsx:"));
    assert!(!stderr.contains("use -v for details"));

    Ok(())
}

#[test]
fn test_output_cannot_be_created() -> Result<()> {
    let test = CliTest::with_file("a.tsx", "a\n")?;
    std::fs::create_dir(test.root().join("copy-code.txt"))?;

    let output = test.command().output()?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Error: Failed to create output file: copy-code.txt"));

    Ok(())
}

#[test]
fn test_rejects_unexpected_arguments() -> Result<()> {
    let test = CliTest::with_file("a.tsx", "a\n")?;

    let output = test.command().arg("src").output()?;
    assert!(!output.status.success());
    assert!(!test.root().join("copy-code.txt").exists());

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("--verbose"));
    assert!(!test.root().join("copy-code.txt").exists());

    Ok(())
}
