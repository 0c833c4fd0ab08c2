//! geomkit 命令行程序
//!
//! 图元以 JSON 形式传入，结果以 JSON 输出到标准输出，日志写到标准错误。

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use geomkit_core::prelude::*;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Parser)]
#[command(name = "geomkit", version, about = "2D 点变换与直线/圆求交")]
struct Cli {
    /// 日志级别（trace/debug/info/warn/error）
    #[arg(long, global = true, env = "GEOMKIT_LOG", default_value = "warn")]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 两个图元求交，例如 '{"type":"circle","center":{"x":0,"y":0},"radius":5}'
    Intersect {
        shape_a: String,
        shape_b: String,
    },

    /// 绕中心点旋转（角度单位为度，逆时针为正）
    #[command(allow_negative_numbers = true)]
    Rotate {
        x: f64,
        y: f64,
        angle: f64,
        /// 旋转中心，格式为 `cx,cy`，默认原点
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        center: Option<Point>,
    },

    /// 沿竖直线或水平线镜像
    #[command(
        allow_negative_numbers = true,
        group(ArgGroup::new("axis").required(true).args(["vertical", "horizontal"]))
    )]
    Mirror {
        x: f64,
        y: f64,
        /// 竖直镜像轴 `X = 值`
        #[arg(long, allow_hyphen_values = true)]
        vertical: Option<f64>,
        /// 水平镜像轴 `Y = 值`
        #[arg(long, allow_hyphen_values = true)]
        horizontal: Option<f64>,
    },

    /// 经过两点且半径给定的两个圆的圆心
    #[command(allow_negative_numbers = true)]
    Centers {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        radius: f64,
    },
}

fn parse_point(s: &str) -> std::result::Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok(Point::new(x, y))
}

fn parse_shape(json: &str) -> Result<Shape> {
    serde_json::from_str(json).with_context(|| format!("invalid shape JSON: {json}"))
}

/// 执行子命令，返回要输出的 JSON
fn execute(command: Command) -> Result<String> {
    debug!(?command, "executing");

    let output = match command {
        Command::Intersect { shape_a, shape_b } => {
            let a = parse_shape(&shape_a)?;
            let b = parse_shape(&shape_b)?;
            let result = intersect(&a, &b);
            debug!(count = result.len(), "intersection computed");
            serde_json::to_string(&result)?
        }
        Command::Rotate { x, y, angle, center } => {
            serde_json::to_string(&rotate(Point::new(x, y), angle, center))?
        }
        Command::Mirror {
            x,
            y,
            vertical,
            horizontal,
        } => {
            let point = Point::new(x, y);
            let mirrored = match (vertical, horizontal) {
                (Some(axis), _) => mirror_vertical(point, axis),
                (None, Some(axis)) => mirror_horizontal(point, axis),
                (None, None) => anyhow::bail!("either --vertical or --horizontal is required"),
            };
            serde_json::to_string(&mirrored)?
        }
        Command::Centers {
            x1,
            y1,
            x2,
            y2,
            radius,
        } => {
            let centers = Circle::centers_through(Point::new(x1, y1), Point::new(x2, y2), radius);
            serde_json::to_string(&centers)?
        }
    };

    Ok(output)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(cli.log_level)
            .with_writer(std::io::stderr)
            .finish(),
    )?;

    let output = execute(cli.command)?;
    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("geomkit").chain(args.iter().copied()))?;
        execute(cli.command)
    }

    #[test]
    fn test_intersect_circles() {
        let out = run(&[
            "intersect",
            r#"{"type":"circle","center":{"x":0.0,"y":-4.0},"radius":5.0}"#,
            r#"{"type":"circle","center":{"x":0.0,"y":6.0},"radius":5.0}"#,
        ])
        .unwrap();
        assert_eq!(out, r#"{"kind":"points","points":[{"x":0.0,"y":1.0}]}"#);
    }

    #[test]
    fn test_intersect_parallel_lines() {
        let out = run(&[
            "intersect",
            r#"{"type":"line","p0":{"x":1.0,"y":0.0},"p1":{"x":0.0,"y":1.0}}"#,
            r#"{"type":"line","p0":{"x":2.0,"y":0.0},"p1":{"x":0.0,"y":2.0}}"#,
        ])
        .unwrap();
        assert_eq!(out, r#"{"kind":"no_unique_point"}"#);
    }

    #[test]
    fn test_intersect_invalid_json() {
        let err = run(&["intersect", "{}", "{}"]).unwrap_err();
        assert!(err.to_string().contains("invalid shape JSON"));
    }

    #[test]
    fn test_rotate() {
        assert_eq!(run(&["rotate", "1", "2", "90"]).unwrap(), r#"{"x":-2.0,"y":1.0}"#);
        assert_eq!(
            run(&["rotate", "2", "1", "90", "--center", "1,1"]).unwrap(),
            r#"{"x":1.0,"y":2.0}"#
        );
        assert_eq!(
            run(&["rotate", "1", "2", "-90"]).unwrap(),
            r#"{"x":2.0,"y":-1.0}"#
        );
    }

    #[test]
    fn test_mirror() {
        assert_eq!(
            run(&["mirror", "1", "2", "--vertical", "3"]).unwrap(),
            r#"{"x":5.0,"y":2.0}"#
        );
        assert_eq!(
            run(&["mirror", "1", "2", "--horizontal", "0"]).unwrap(),
            r#"{"x":1.0,"y":-2.0}"#
        );
        assert!(run(&["mirror", "1", "2"]).is_err());
        assert!(run(&["mirror", "1", "2", "--vertical", "0", "--horizontal", "0"]).is_err());
    }

    #[test]
    fn test_centers() {
        assert_eq!(
            run(&["centers", "0", "0", "0", "8", "5"]).unwrap(),
            r#"[{"x":-3.0,"y":4.0},{"x":3.0,"y":4.0}]"#
        );
        assert_eq!(run(&["centers", "0", "0", "0", "8", "3"]).unwrap(), "null");
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("-1, 2.5"), Ok(Point::new(-1.0, 2.5)));
        assert!(parse_point("1;2").is_err());
        assert!(parse_point("a,2").is_err());
    }

    #[test]
    fn test_log_level_flag() {
        let cli = Cli::try_parse_from(["geomkit", "--log-level", "debug", "rotate", "0", "0", "0"])
            .unwrap();
        assert_eq!(cli.log_level, Level::DEBUG);
    }
}
