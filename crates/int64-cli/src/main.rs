//! Evaluate a single boxed integer operation against an in-process heap.
//!
//! ```text
//! int64 signed add 9223372036854775807 1
//! int64 unsigned add s:-1 u:1
//! int64 -O byte-width=pointer signed len 0
//! ```
//!
//! Operands are decimal strings unless prefixed: `s:` and `u:` bind a boxed
//! value of that kind first, `i:` passes a native integer and `f:` a native
//! float.

use anyhow::{Context as _, Result};
use clap::{Parser, ValueEnum};
use int64::host::{self, Heap, Host, Returned};
use int64::{Context, Kind, Operand, Options, Protocol};
use tracing_subscriber::filter::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Family {
    /// The `Signed64` operators.
    Signed,
    /// The `Unsigned64` operators.
    Unsigned,
}

impl From<Family> for Kind {
    fn from(family: Family) -> Self {
        match family {
            Family::Signed => Kind::Signed,
            Family::Unsigned => Kind::Unsigned,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "int64", about = "Evaluate boxed 64-bit integer operations")]
struct Args {
    /// Set the given option, like `byte-width=pointer`.
    #[arg(short = 'O', num_args = 1)]
    option: Vec<String>,

    /// List available operations and exit.
    #[arg(long)]
    list: bool,

    /// The operator family to evaluate with.
    #[arg(value_enum, required_unless_present = "list")]
    family: Option<Family>,

    /// The operation to perform, `new` constructs a value.
    #[arg(required_unless_present = "list")]
    op: Option<String>,

    /// Operands to the operation.
    #[arg(allow_hyphen_values = true)]
    operands: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    println!("{}", run(&args)?);
    Ok(())
}

/// Evaluate the operation described by `args`, returning what to print.
fn run(args: &Args) -> Result<String> {
    if args.list {
        let mut lines = vec![String::from("new: 0 or 1 operands")];

        for protocol in Protocol::ALL {
            lines.push(format!("{protocol}: {} operand(s)", protocol.arity()));
        }

        return Ok(lines.join("\n"));
    }

    let mut options = Options::default();

    for option in &args.option {
        options.parse_option(option)?;
    }

    let (Some(family), Some(op)) = (args.family, args.op.as_deref()) else {
        anyhow::bail!("missing operator family or operation");
    };

    let kind = Kind::from(family);
    let cx = Context::with_options(options);
    let mut heap = Heap::new();

    let mut operands = Vec::with_capacity(args.operands.len());

    for operand in &args.operands {
        operands.push(operand_from_arg(&mut heap, &cx, operand)?);
    }

    if op == "new" {
        let handle = match kind {
            Kind::Signed => host::new_signed(&mut heap, &cx, &operands)?,
            Kind::Unsigned => host::new_unsigned(&mut heap, &cx, &operands)?,
        };

        let value = heap.resolve(&handle).context("value was released")?;
        return Ok(value.to_string());
    }

    let protocol = Protocol::from_name(op).with_context(|| format!("unknown operation `{op}`"))?;

    match host::call(&mut heap, &cx, kind, protocol, &operands)? {
        Returned::Handle(handle) => {
            tracing::trace!(?handle, "result");
            let value = heap.resolve(&handle).context("result was released")?;
            Ok(value.to_string())
        }
        Returned::Bool(b) => Ok(b.to_string()),
        Returned::String(s) => Ok(s),
        Returned::Size(n) => Ok(n.to_string()),
    }
}

/// Convert a command line argument into an operand, binding boxed values in
/// the heap the way a host would before calling an operator.
fn operand_from_arg<'a>(heap: &mut Heap, cx: &Context, arg: &'a str) -> Result<Operand<'a>> {
    let handle = if let Some(rest) = arg.strip_prefix("s:") {
        host::new_signed(heap, cx, &[rest.into()])?
    } else if let Some(rest) = arg.strip_prefix("u:") {
        host::new_unsigned(heap, cx, &[rest.into()])?
    } else if let Some(rest) = arg.strip_prefix("i:") {
        let n = rest
            .parse::<i64>()
            .with_context(|| format!("bad integer `{rest}`"))?;
        return Ok(Operand::from(n));
    } else if let Some(rest) = arg.strip_prefix("f:") {
        let n = rest
            .parse::<f64>()
            .with_context(|| format!("bad float `{rest}`"))?;
        return Ok(Operand::from(n));
    } else {
        return Ok(Operand::String(arg));
    };

    let value = heap.resolve(&handle).context("operand was released")?;
    Ok(Operand::Value(value))
}
