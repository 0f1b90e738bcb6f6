use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, temp_dir_filters};

#[test]
fn test_reports_unused_key() -> Result<()> {
    let test = CliTest::with_file("a.ts", "t('greeting')\n")?;
    test.write_file("en.json", r#"{"greeting": "x", "farewell": "y"}"#)?;

    assert_cmd_snapshot!(test.find_command("en.json"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    farewell

    Searched through: 1 file
    Found 1 unused key in en.json

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_all_keys_used() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.json", r#"{"a": 1}"#)?;
    test.write_file("b.html", "<p>a</p>\n")?;
    test.write_file("c.ts", "nothing here\n")?;

    assert_cmd_snapshot!(test.find_command("en.json"), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    Searched through: 2 files
    ✓ Found 0 unused keys in en.json

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_empty_dictionary() -> Result<()> {
    let test = CliTest::with_file("app.ts", "t('whatever')\n")?;
    test.write_file("en.json", "{}")?;

    assert_cmd_snapshot!(test.find_command("en.json"), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    Searched through: 1 file
    ✓ Found 0 unused keys in en.json

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_no_files_means_every_key_unused() -> Result<()> {
    let test = CliTest::with_file("readme.md", "title subtitle\n")?;
    test.write_file("en.json", r#"{"title": "", "subtitle": ""}"#)?;

    assert_cmd_snapshot!(test.find_command("en.json"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    subtitle
    title

    Searched through: 0 files
    Found 2 unused keys in en.json

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_substring_match_counts_as_used() -> Result<()> {
    let test = CliTest::with_file("form.html", "<input name=\"username\">\n")?;
    test.write_file("en.json", r#"{"user": "", "password": ""}"#)?;

    assert_cmd_snapshot!(test.find_command("en.json"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    password

    Searched through: 1 file
    Found 1 unused key in en.json

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_line_separators_split_lines() -> Result<()> {
    let test = CliTest::with_file("a.ts", "greeting\u{2028}farewell\x0cgreeting\n")?;
    test.write_file("en.json", r#"{"greeting": "", "farewell": ""}"#)?;

    let mut cmd = test.find_command("en.json");
    cmd.arg("--usages");

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    farewell  1 appearance
      --> ./a.ts:2
    greeting  2 appearances
      --> ./a.ts:1
      --> ./a.ts:3


    Searched through: 1 file
    ✓ Found 0 unused keys in en.json

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_nested_directories_and_filters() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/en.json", r#"{"home": "", "about": "", "legal": ""}"#)?;
    test.write_file("src/app/home/home.component.html", "{{ 'home' | translate }}\n")?;
    test.write_file("src/app/about/about.component.ts", "this.t('about');\n")?;
    test.write_file("src/app/legal/legal.txt", "legal\n")?;
    test.write_file("src/.DS_Store", "legal\n")?;

    assert_cmd_snapshot!(test.find_command("i18n/en.json"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    legal

    Searched through: 2 files
    Found 1 unused key in i18n/en.json

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_custom_file_formats() -> Result<()> {
    let test = CliTest::with_file("App.tsx", "t('title')\n")?;
    test.write_file("en.json", r#"{"title": ""}"#)?;

    assert_cmd_snapshot!(test.find_command("en.json"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    title

    Searched through: 0 files
    Found 1 unused key in en.json

    ----- stderr -----
    ");

    let mut cmd = test.find_command("en.json");
    cmd.args(["-f", ".tsx"]);

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----

    Searched through: 1 file
    ✓ Found 0 unused keys in en.json

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_ignore_pattern() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "t('title')\n")?;
    test.write_file("dist/bundle.ts", "t('legacy')\n")?;
    test.write_file("en.json", r#"{"title": "", "legacy": ""}"#)?;

    let mut cmd = test.find_command("en.json");
    cmd.args(["-i", "dist"]);

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    legacy

    Searched through: 1 file
    Found 1 unused key in en.json

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_config_file_supplies_keys_and_formats() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".unused-i18n.json",
        r#"{ "keys": "locales/en.json", "fileFormats": [".vue"], "ignores": ["**/legacy/**"] }"#,
    )?;
    test.write_file("locales/en.json", r#"{"title": "", "old": ""}"#)?;
    test.write_file("src/App.vue", "{{ $t('title') }}\n")?;
    test.write_file("src/legacy/Old.vue", "{{ $t('old') }}\n")?;

    let mut cmd = test.command();
    cmd.args(["-r", "."]);

    insta::with_settings!({ filters => temp_dir_filters() }, {
        assert_cmd_snapshot!(cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----
        old

        Searched through: 1 file
        Found 1 unused key in [TEMP]/locales/en.json

        ----- stderr -----
        ");
    });

    Ok(())
}

#[test]
fn test_config_file_found_above_relative_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".unused-i18n.json", r#"{ "keys": "en.json" }"#)?;
    test.write_file("en.json", r#"{"title": "", "old": ""}"#)?;
    test.write_file("web/page.ts", "t('title')\n")?;

    let mut cmd = test.command();
    cmd.current_dir(test.root().join("web"));
    cmd.args(["-r", "."]);

    insta::with_settings!({ filters => temp_dir_filters() }, {
        assert_cmd_snapshot!(cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----
        old

        Searched through: 1 file
        Found 1 unused key in [TEMP]/en.json

        ----- stderr -----
        ");
    });

    Ok(())
}

#[test]
fn test_usages_flag_lists_locations() -> Result<()> {
    let test = CliTest::with_file("a.ts", "import x;\nt('greeting')\n")?;
    test.write_file("en.json", r#"{"greeting": "x", "farewell": "y"}"#)?;

    let mut cmd = test.find_command("en.json");
    cmd.arg("--usages");

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    greeting  1 appearance
      --> ./a.ts:2

    farewell

    Searched through: 1 file
    Found 1 unused key in en.json

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let test = CliTest::with_file("a.ts", "t('greeting')\n")?;
    test.write_file("en.json", r#"{"greeting": "x", "farewell": "y"}"#)?;

    let mut cmd = test.find_command("en.json");
    cmd.args(["--json", "--usages"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "unusedKeys": [
        "farewell"
      ],
      "filesScanned": 1,
      "unusedCount": 1,
      "totalKeys": 2,
      "usedCount": 1,
      "keysPath": "en.json",
      "usages": {
        "greeting": {
          "appearances": 1,
          "files": [
            "./a.ts"
          ],
          "lines": [
            "t('greeting')\n"
          ],
          "lineNumbers": [
            1
          ]
        }
      },
      "warnings": []
    }

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_strict_fails_on_unused_keys() -> Result<()> {
    let test = CliTest::with_file("a.ts", "t('greeting')\n")?;
    test.write_file("en.json", r#"{"greeting": "x", "farewell": "y"}"#)?;

    let mut cmd = test.find_command("en.json");
    cmd.arg("--strict");

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 1
    ----- stdout -----
    farewell

    Searched through: 1 file
    Found 1 unused key in en.json

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_missing_dictionary_is_fatal() -> Result<()> {
    let test = CliTest::with_file("a.ts", "t('greeting')\n")?;

    assert_cmd_snapshot!(test.find_command("missing.json"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Path not found or not accessible: missing.json: No such file or directory (os error 2)
    ");

    Ok(())
}

#[test]
fn test_malformed_dictionary_is_fatal() -> Result<()> {
    let test = CliTest::with_file("en.json", r#"["greeting"]"#)?;

    assert_cmd_snapshot!(test.find_command("en.json"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to parse key file en.json: expected an object at the top level, found an array
    ");

    Ok(())
}

#[test]
fn test_missing_root_is_fatal() -> Result<()> {
    let test = CliTest::with_file("en.json", "{}")?;

    let mut cmd = test.command();
    cmd.args(["-r", "nope", "-k", "en.json"]);

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Path not found or not accessible: nope: No such file or directory (os error 2)
    ");

    Ok(())
}

#[test]
fn test_missing_keys_argument() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().args(["-r", "."]), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: No key file given. Pass --keys <PATH> or set "keys" in .unused-i18n.json
    "#);

    Ok(())
}

#[test]
fn test_keys_from_environment() -> Result<()> {
    let test = CliTest::with_file("a.ts", "greeting\n")?;
    test.write_file("en.json", r#"{"greeting": ""}"#)?;

    let mut cmd = test.command();
    cmd.env("UNUSED_I18N_KEYS", "en.json");

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----

    Searched through: 1 file
    ✓ Found 0 unused keys in en.json

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_invalid_utf8_file_is_skipped_with_warning() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.json", r#"{"greeting": "", "farewell": ""}"#)?;
    test.write_bytes("legacy.ts", b"t('greeting')\n\xFF\xFE\n")?;
    test.write_file("app.ts", "t('farewell')\n")?;

    assert_cmd_snapshot!(test.find_command("en.json"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    greeting

    Searched through: 2 files
    Found 1 unused key in en.json

    ----- stderr -----
    warning: 1 path(s) skipped due to access or encoding errors (use -v for details)
    ");

    let mut cmd = test.find_command("en.json");
    cmd.arg("-v");

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    greeting

    Searched through: 2 files
    Found 1 unused key in en.json

    ----- stderr -----
    Note: No .unused-i18n.json found, using default configuration
    warning: File is not valid UTF-8: ./legacy.ts (file skipped)
    ");

    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_file_name_is_scanned() -> Result<()> {
    use std::{ffi::OsStr, fs, os::unix::ffi::OsStrExt};

    let test = CliTest::new()?;
    test.write_file("en.json", r#"{"greeting": "x"}"#)?;
    fs::write(
        test.root().join(OsStr::from_bytes(b"caf\xE9.ts")),
        "t('greeting')\n",
    )?;

    assert_cmd_snapshot!(test.find_command("en.json"), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    Searched through: 1 file
    ✓ Found 0 unused keys in en.json

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_repeated_runs_are_identical() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.json", r#"{"c": 1, "a": 2, "b": 3, "dd": 4}"#)?;
    test.write_file("x/one.ts", "dd\n")?;
    test.write_file("y/two.html", "nothing\n")?;

    let first = test.find_command("en.json").output()?;
    let second = test.find_command("en.json").output()?;
    assert_eq!(first.stdout, second.stdout);

    assert_cmd_snapshot!(test.find_command("en.json"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    a
    b
    c

    Searched through: 2 files
    Found 3 unused keys in en.json

    ----- stderr -----
    ");

    Ok(())
}
