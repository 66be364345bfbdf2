// Benchmark harness for the linear containers.
//
// Purpose:
// - Time identical operation batches against Stack, Queue, SinglyLinkedList, and a plain Vec baseline.
// - Emit a human-readable table and/or a machine-readable JSON report.
//
// Design notes:
// - Wall-clock timing of single runs; good enough to see O(1) vs O(n) growth across sizes, not lab-grade.
// - Linked list batches are capped at a smaller size, as its positional operations walk the chain.

use std::hint::black_box;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use serde::Serialize;
use serde_json::{Value, json};

use linear_collections::{Error, ErrorKind, Queue, SinglyLinkedList, Stack};

pub const DEFAULT_SIZES: [usize; 3] = [100, 1_000, 10_000];
pub const DEFAULT_LIST_LIMIT: usize = 1_000;
pub const DEFAULT_ACCESS_SIZE: usize = 10_000;

// Stride used by the random-access comparison.
const ACCESS_STRIDE: usize = 100;

#[derive(Clone, Debug)]
pub struct BenchArgs {
    pub sizes: Vec<usize>,
    pub list_limit: usize,
    pub access_size: usize,
    pub format: BenchFormat,
    pub out: Option<PathBuf>,
}

impl Default for BenchArgs {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            list_limit: DEFAULT_LIST_LIMIT,
            access_size: DEFAULT_ACCESS_SIZE,
            format: BenchFormat::Table,
            out: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BenchFormat {
    Json,
    Table,
    Both,
}

impl BenchFormat {
    pub fn parse(input: &str) -> Result<Self, Error> {
        match input.trim() {
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            "both" => Ok(Self::Both),
            _ => Err(Error::new(ErrorKind::Usage)
                .with_message("invalid --format (use json|table|both)")),
        }
    }
}

/// One timed batch.
#[derive(Clone, Debug, Serialize)]
pub struct BatchResult {
    pub structure: &'static str,
    pub op: &'static str,
    pub n: usize,
    pub ops: usize,
    pub duration_ms: f64,
    pub ns_per_op: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'static str>,
}

impl BatchResult {
    fn new(
        structure: &'static str,
        op: &'static str,
        n: usize,
        ops: usize,
        duration: Duration,
    ) -> Self {
        let per = if ops == 0 { 1 } else { ops } as f64;
        Self {
            structure,
            op,
            n,
            ops,
            duration_ms: duration.as_secs_f64() * 1000.0,
            ns_per_op: duration.as_nanos() as f64 / per,
            notes: None,
        }
    }

    fn with_notes(mut self, notes: &'static str) -> Self {
        self.notes = Some(notes);
        self
    }
}

pub fn run_bench(args: BenchArgs, program_version: &str) -> Result<(), Error> {
    if args.sizes.is_empty() {
        return Err(Error::new(ErrorKind::Usage)
            .with_message("bench requires at least one size")
            .with_hint("Pass sizes like --sizes 100,1000."));
    }

    let start = SystemTime::now();
    let results = collect_results(&args);
    let report = report_json(&args, &results, program_version, start)?;

    if let Some(path) = &args.out {
        write_json_file(path, &report)?;
        tracing::info!(path = %path.display(), "wrote bench report");
    }

    emit_bench_output(&report, &results, args.format)
}

pub fn collect_results(args: &BenchArgs) -> Vec<BatchResult> {
    let mut results = Vec::new();
    for &n in &args.sizes {
        tracing::debug!(n, "running batches");
        results.extend(bench_stack(n));
        results.extend(bench_queue(n));
        results.extend(bench_vec(n));
        if n <= args.list_limit {
            results.extend(bench_linked_list(n));
        } else {
            tracing::debug!(n, limit = args.list_limit, "skipping linked list batches");
        }
    }
    if args.access_size > 0 {
        results.extend(bench_access_patterns(args.access_size));
    }
    for result in &results {
        tracing::info!(
            structure = result.structure,
            op = result.op,
            n = result.n,
            duration_ms = result.duration_ms,
            "batch complete"
        );
    }
    results
}

fn bench_stack(n: usize) -> Vec<BatchResult> {
    let mut stack = Stack::new();
    let push = time_batch(|| {
        for i in 0..n {
            stack.push(black_box(i));
        }
    });

    let pop = time_batch(|| {
        for _ in 0..n {
            let _ = black_box(stack.pop());
        }
    });

    vec![
        BatchResult::new("stack", "push", n, n, push),
        BatchResult::new("stack", "pop", n, n, pop),
    ]
}

fn bench_queue(n: usize) -> Vec<BatchResult> {
    let mut queue = Queue::new();
    let enqueue = time_batch(|| {
        for i in 0..n {
            queue.enqueue(black_box(i));
        }
    });

    let dequeue = time_batch(|| {
        for _ in 0..n {
            let _ = black_box(queue.dequeue());
        }
    });

    vec![
        BatchResult::new("queue", "enqueue", n, n, enqueue),
        BatchResult::new("queue", "dequeue", n, n, dequeue),
    ]
}

fn bench_vec(n: usize) -> Vec<BatchResult> {
    let mut baseline = Vec::new();
    let push = time_batch(|| {
        for i in 0..n {
            baseline.push(black_box(i));
        }
    });

    let mut baseline = Vec::new();
    let insert_front = time_batch(|| {
        for i in 0..n {
            baseline.insert(0, black_box(i));
        }
    });

    let remove_front = time_batch(|| {
        for _ in 0..n {
            black_box(baseline.remove(0));
        }
    });

    vec![
        BatchResult::new("vec", "push", n, n, push).with_notes("baseline"),
        BatchResult::new("vec", "insert_front", n, n, insert_front)
            .with_notes("baseline, shifts every element"),
        BatchResult::new("vec", "remove_front", n, n, remove_front)
            .with_notes("baseline, shifts every element"),
    ]
}

fn bench_linked_list(n: usize) -> Vec<BatchResult> {
    let mut list = SinglyLinkedList::new();
    let append = time_batch(|| {
        for i in 0..n {
            list.append(black_box(i));
        }
    });

    let mut prepended = SinglyLinkedList::new();
    let prepend = time_batch(|| {
        for i in 0..n {
            prepended.prepend(black_box(i));
        }
    });

    // `list` now holds n elements; each insert below is a single operation.
    let insert_front = time_batch(|| {
        let _ = black_box(list.insert(0, usize::MAX));
    });
    let mid = list.len() / 2;
    let insert_middle = time_batch(|| {
        let _ = black_box(list.insert(mid, usize::MAX));
    });

    vec![
        BatchResult::new("linked_list", "append", n, n, append),
        BatchResult::new("linked_list", "prepend", n, n, prepend),
        BatchResult::new("linked_list", "insert_front", n, 1, insert_front)
            .with_notes("single insert at index 0"),
        BatchResult::new("linked_list", "insert_middle", n, 1, insert_middle)
            .with_notes("single insert at len/2"),
    ]
}

fn bench_access_patterns(n: usize) -> Vec<BatchResult> {
    let vec: Vec<usize> = (0..n).collect();
    let list: SinglyLinkedList<usize> = (0..n).collect();

    let strided = (0..n).step_by(ACCESS_STRIDE).count();
    let vec_indexed = time_batch(|| {
        let mut total = 0usize;
        for i in (0..n).step_by(ACCESS_STRIDE) {
            total = total.wrapping_add(vec[i]);
        }
        black_box(total);
    });

    // The list has no index access; the usual workaround is copying it out first.
    let list_indexed = time_batch(|| {
        let values: Vec<usize> = list.iter().copied().collect();
        let mut total = 0usize;
        for i in (0..n).step_by(ACCESS_STRIDE) {
            total = total.wrapping_add(values[i]);
        }
        black_box(total);
    });

    let vec_sequential = time_batch(|| {
        for value in &vec {
            black_box(value);
        }
    });

    let list_sequential = time_batch(|| {
        for value in &list {
            black_box(value);
        }
    });

    vec![
        BatchResult::new("vec", "strided_index", n, strided, vec_indexed),
        BatchResult::new("linked_list", "strided_index", n, strided, list_indexed)
            .with_notes("includes copying the list into a Vec"),
        BatchResult::new("vec", "iterate", n, n, vec_sequential),
        BatchResult::new("linked_list", "iterate", n, n, list_sequential),
    ]
}

fn time_batch(batch: impl FnOnce()) -> Duration {
    let start = Instant::now();
    batch();
    start.elapsed()
}

pub fn report_json(
    args: &BenchArgs,
    results: &[BatchResult],
    program_version: &str,
    start: SystemTime,
) -> Result<Value, Error> {
    let results = serde_json::to_value(results).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("failed to encode bench results")
            .with_source(err)
    })?;
    Ok(json!({
        "name": "linear-collections",
        "version": program_version,
        "ts": rfc3339_now(start),
        "system": system_json(),
        "params": {
            "sizes": args.sizes,
            "list_limit": args.list_limit,
            "access_size": args.access_size,
            "debug_build": cfg!(debug_assertions),
        },
        "results": results,
    }))
}

fn emit_bench_output(
    report: &Value,
    results: &[BatchResult],
    format: BenchFormat,
) -> Result<(), Error> {
    match format {
        BenchFormat::Json => emit_json(report),
        BenchFormat::Table => emit_table(&mut io::stdout().lock(), results),
        BenchFormat::Both => {
            emit_json(report)?;
            emit_table(&mut io::stderr().lock(), results)
        }
    }
}

fn emit_json(report: &Value) -> Result<(), Error> {
    let text = serde_json::to_string_pretty(report).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("json encode failed")
            .with_source(err)
    })?;
    println!("{text}");
    Ok(())
}

pub fn emit_table(out: &mut dyn Write, results: &[BatchResult]) -> Result<(), Error> {
    write_table(out, results).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to write bench table")
            .with_source(err)
    })
}

fn write_table(out: &mut dyn Write, results: &[BatchResult]) -> io::Result<()> {
    writeln!(out, "linear-collections bench")?;
    writeln!(
        out,
        "{:>12}  {:>14}  {:>8}  {:>8}  {:>12}  {:>12}  {}",
        "structure", "op", "n", "ops", "total ms", "ns/op", "notes"
    )?;

    let mut current_n = None;
    for item in results {
        if current_n != Some(item.n) {
            writeln!(out, "{}", "-".repeat(84))?;
            current_n = Some(item.n);
        }
        writeln!(
            out,
            "{:>12}  {:>14}  {:>8}  {:>8}  {:>12.6}  {:>12.1}  {}",
            item.structure,
            item.op,
            item.n,
            item.ops,
            item.duration_ms,
            item.ns_per_op,
            item.notes.unwrap_or("")
        )?;
    }
    Ok(())
}

fn write_json_file(path: &Path, value: &Value) -> Result<(), Error> {
    let bytes = serde_json::to_vec_pretty(value).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("json encode failed")
            .with_source(err)
    })?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message(format!("failed to create {}", parent.display()))
                .with_source(err)
        })?;
    }
    std::fs::write(path, bytes).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message(format!("failed to write {}", path.display()))
            .with_source(err)
    })
}

fn system_json() -> Value {
    let cpus = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
    json!({
        "os": std::env::consts::OS,
        "arch": std::env::consts::ARCH,
        "cpus": cpus,
    })
}

fn rfc3339_now(ts: SystemTime) -> String {
    let dur = ts.duration_since(UNIX_EPOCH).unwrap_or_default();
    let secs = dur.as_secs() as i64;
    let nsec = dur.subsec_nanos();
    let tm = time::OffsetDateTime::from_unix_timestamp(secs)
        .unwrap_or(time::OffsetDateTime::UNIX_EPOCH);
    let tm = tm.replace_nanosecond(nsec).unwrap_or(tm);
    tm.format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}

#[cfg(test)]
mod tests {
    use super::{BatchResult, BenchArgs, BenchFormat, collect_results, emit_table, report_json};
    use std::time::{Duration, SystemTime};

    fn small_args() -> BenchArgs {
        BenchArgs {
            sizes: vec![10, 50],
            list_limit: 10,
            access_size: 200,
            ..BenchArgs::default()
        }
    }

    #[test]
    fn format_parse_accepts_known_values() {
        assert_eq!(BenchFormat::parse("json").expect("json"), BenchFormat::Json);
        assert_eq!(BenchFormat::parse(" table ").expect("table"), BenchFormat::Table);
        assert_eq!(BenchFormat::parse("both").expect("both"), BenchFormat::Both);
        assert!(BenchFormat::parse("yaml").is_err());
    }

    #[test]
    fn linked_list_batches_respect_limit() {
        let results = collect_results(&small_args());

        let list_sizes: Vec<usize> = results
            .iter()
            .filter(|r| r.structure == "linked_list" && r.op == "append")
            .map(|r| r.n)
            .collect();
        assert_eq!(list_sizes, vec![10]);

        // stack 2 + queue 2 + vec 3 per size, list 4 for n=10, access 4.
        assert_eq!(results.len(), 2 * 7 + 4 + 4);
        assert!(results.iter().any(|r| r.op == "strided_index" && r.ops == 2));
    }

    #[test]
    fn report_carries_params_and_rows() {
        let args = small_args();
        let results = collect_results(&args);
        let report = report_json(&args, &results, "9.9.9", SystemTime::now()).expect("report");

        assert_eq!(report["name"], "linear-collections");
        assert_eq!(report["version"], "9.9.9");
        assert_eq!(report["params"]["list_limit"], 10);
        let rows = report["results"].as_array().expect("results array");
        assert_eq!(rows.len(), results.len());
        assert!(rows[0].get("notes").is_none());
        assert!(rows.iter().all(|row| row["ns_per_op"].as_f64().is_some()));
    }

    #[test]
    fn table_lists_every_batch() {
        let results = vec![
            BatchResult::new("stack", "push", 10, 10, Duration::from_micros(5)),
            BatchResult::new("vec", "insert_front", 10, 10, Duration::from_micros(9))
                .with_notes("baseline"),
        ];
        let mut out = Vec::new();
        emit_table(&mut out, &results).expect("table");
        let text = String::from_utf8(out).expect("utf8");

        assert!(text.starts_with("linear-collections bench"));
        assert!(text.contains("push"));
        assert!(text.contains("insert_front"));
        assert!(text.contains("baseline"));
        assert_eq!(text.lines().count(), 2 + 1 + 2);
    }

    #[test]
    fn ns_per_op_handles_zero_ops() {
        let row = BatchResult::new("stack", "pop", 0, 0, Duration::from_nanos(40));
        assert_eq!(row.ns_per_op, 40.0);
    }
}
