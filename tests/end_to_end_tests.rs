use std::fs;
use tailwind_formatter::{format_files, FormatArgs, LayoutArgs, WrapIndentStyle};
use tempfile::tempdir;

fn args_for(pattern: String) -> FormatArgs {
    FormatArgs {
        input: vec![pattern],
        exclude: vec![],
        config: None,
        layout: LayoutArgs::default(),
        check: false,
        dry_run: false,
        report: None,
        verbose: false,
        jobs: None,
    }
}

#[tokio::test]
async fn test_end_to_end_formatting() {
    let temp_dir = tempdir().unwrap();

    let html_file = temp_dir.path().join("index.html");
    fs::write(&html_file, r##"<body>
  <div id="app" class="text-white md:px-8 px-4 bg-blue-500 flex hover:bg-blue-600">
    <h1 class="font-bold text-2xl">Hello</h1>
  </div>
</body>
"##).unwrap();

    let jsx_file = temp_dir.path().join("button.jsx");
    fs::write(&jsx_file, r##"export const Button = () => <button className='rounded px-4 py-2'>Go</button>;
"##).unwrap();

    let untouched = temp_dir.path().join("plain.html");
    fs::write(&untouched, "<p>No classes here</p>\n").unwrap();

    let report_path = temp_dir.path().join("reports").join("run.json");
    let mut args = args_for(format!("{}/*", temp_dir.path().display()));
    args.report = Some(report_path.clone());

    let result = format_files(args).await.unwrap();

    assert_eq!(result.total_files_processed, 3);
    assert_eq!(result.files_changed, 2);
    assert_eq!(result.tags_formatted, 3);
    let stats = result.performance_stats.as_ref().unwrap();
    assert!(stats.bytes_processed > 0);
    assert!(stats.files_per_second > 0.0);
    assert!(stats.formatting_duration <= stats.total_duration);

    let html = fs::read_to_string(&html_file).unwrap();
    assert_eq!(html, r##"<body>
  <div
    id="app"
    class="
      flex
      px-4 md:px-8
      text-white
      bg-blue-500 hover:bg-blue-600
    "
  >
    <h1
      class="
        font-bold text-2xl
      "
    >Hello</h1>
  </div>
</body>
"##);

    let jsx = fs::read_to_string(&jsx_file).unwrap();
    assert_eq!(jsx, "export const Button = () => <button\n  className='\n    px-4 py-2\n    rounded\n  '\n>Go</button>;\n");

    assert_eq!(fs::read_to_string(&untouched).unwrap(), "<p>No classes here</p>\n");

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["metadata"]["files_processed"], 3);
    assert_eq!(report["metadata"]["files_changed"], 2);
    assert_eq!(report["metadata"]["check_only"], false);
}

#[tokio::test]
async fn test_second_run_changes_nothing() {
    let temp_dir = tempdir().unwrap();
    let file = temp_dir.path().join("page.html");
    fs::write(&file, r#"<main class="grid gap-4 p-6 sm:p-8"><a href="/" class="underline text-sm">x</a></main>"#).unwrap();

    let pattern = format!("{}/*.html", temp_dir.path().display());
    let first = format_files(args_for(pattern.clone())).await.unwrap();
    assert_eq!(first.files_changed, 1);
    let after_first = fs::read_to_string(&file).unwrap();

    let second = format_files(args_for(pattern)).await.unwrap();
    assert_eq!(second.files_changed, 0);
    assert_eq!(second.tags_formatted, 0);
    assert_eq!(fs::read_to_string(&file).unwrap(), after_first);
}

#[tokio::test]
async fn test_check_mode_leaves_files_untouched() {
    let temp_dir = tempdir().unwrap();
    let file = temp_dir.path().join("card.vue");
    let original = "<template><div class=\"shadow p-4\"></div></template>";
    fs::write(&file, original).unwrap();

    let mut args = args_for(format!("{}/*.vue", temp_dir.path().display()));
    args.check = true;

    let result = format_files(args).await.unwrap();
    assert_eq!(result.files_changed, 1);
    assert_eq!(result.changed_files().len(), 1);
    assert!(result.changed_files()[0].ends_with("card.vue"));
    assert!(result.report.metadata.check_only);
    assert_eq!(fs::read_to_string(&file).unwrap(), original);
}

#[tokio::test]
async fn test_layout_overrides_apply() {
    let temp_dir = tempdir().unwrap();
    let file = temp_dir.path().join("nav.html");
    fs::write(&file, "<nav class=\"flex items-center justify-between overflow-hidden\">").unwrap();

    let mut args = args_for(format!("{}/*.html", temp_dir.path().display()));
    args.layout.max_line_width = Some(40);
    args.layout.wrap_indent = Some(WrapIndentStyle::Extra);
    args.layout.close_quote_same_line = true;
    args.jobs = Some(2);

    format_files(args).await.unwrap();

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "<nav\n  class=\"\n    flex items-center justify-between\n      overflow-hidden\"\n>"
    );
}

#[tokio::test]
async fn test_config_file_is_used() {
    let temp_dir = tempdir().unwrap();
    let file = temp_dir.path().join("list.html");
    fs::write(&file, "<ul class=\"pt-4 px-2\">").unwrap();

    let config_path = temp_dir.path().join("formatter.yaml");
    fs::write(&config_path, "max_line_width: 0\nclose_quote_on_new_line: false\n").unwrap();

    let mut args = args_for(format!("{}/*.html", temp_dir.path().display()));
    args.config = Some(config_path);

    format_files(args).await.unwrap();

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "<ul\n  class=\"\n    pt-4\n    px-2\"\n>"
    );
}

#[tokio::test]
async fn test_excluded_files_are_skipped() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("keep.html"), "<b class=\"p-1\">").unwrap();
    fs::write(temp_dir.path().join("skip.min.html"), "<b class=\"p-1\">").unwrap();

    let mut args = args_for(format!("{}/*.html", temp_dir.path().display()));
    args.exclude = vec![format!("{}/*.min.html", temp_dir.path().display())];

    let result = format_files(args).await.unwrap();
    assert_eq!(result.total_files_processed, 1);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("skip.min.html")).unwrap(),
        "<b class=\"p-1\">"
    );
}
