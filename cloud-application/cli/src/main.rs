//! cloudctl 命令行工具

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "cloudctl")]
#[command(about = "云管理平台命令行工具", long_about = None)]
#[command(version)]
struct Cli {
    /// 日志级别 (trace/debug/info/warn/error 或 EnvFilter 表达式)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// 配置文件路径 (默认按 CLOUD_CONFIG / ./cloud.toml / ~/.config/cloudctl 搜索)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// 输出格式 (table/json/yaml)，未指定时取配置文件中的默认值
    #[arg(short = 'f', long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 账户管理
    Accounts {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// 用户管理
    Users {
        #[command(subcommand)]
        action: UserAction,
    },

    /// 虚拟机管理
    Vms {
        #[command(subcommand)]
        action: VmAction,
    },

    /// 存储卷管理
    Volumes {
        #[command(subcommand)]
        action: VolumeAction,
    },

    /// 网络管理
    Networks {
        #[command(subcommand)]
        action: NetworkAction,
    },

    /// 模板查询
    Templates {
        #[command(subcommand)]
        action: TemplateAction,
    },

    /// 计算/磁盘方案查询
    Offerings {
        #[command(subcommand)]
        action: OfferingAction,
    },

    /// 卷快照管理
    Snapshots {
        #[command(subcommand)]
        action: SnapshotAction,
    },

    /// 资源标签管理
    Tags {
        #[command(subcommand)]
        action: TagAction,
    },

    /// 区域查询
    Zones {
        #[command(subcommand)]
        action: ZoneAction,
    },

    /// 异步任务查询与等待
    Jobs {
        #[command(subcommand)]
        action: JobAction,
    },
}

#[derive(Subcommand)]
pub enum AccountAction {
    /// 列出账户及配额
    List {
        /// 账户名称
        #[arg(long)]
        name: Option<String>,

        /// 域 ID
        #[arg(long)]
        domain_id: Option<String>,

        /// 关键字过滤
        #[arg(short, long)]
        keyword: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// 列出用户
    List {
        /// 所属账户
        #[arg(long, requires = "domain_id")]
        account: Option<String>,

        /// 域 ID
        #[arg(long)]
        domain_id: Option<String>,

        /// 用户名
        #[arg(long)]
        username: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum VmAction {
    /// 列出虚拟机
    List {
        /// 按状态过滤 (Running/Stopped/...)
        #[arg(long)]
        state: Option<String>,

        /// 区域 ID
        #[arg(short, long)]
        zone: Option<String>,

        /// 关键字过滤
        #[arg(short, long)]
        keyword: Option<String>,

        /// 标签过滤 (key=value，可重复)
        #[arg(short, long)]
        tag: Vec<String>,
    },

    /// 部署虚拟机
    Deploy {
        /// 区域 ID (未指定时取配置文件中的默认区域)
        #[arg(short, long)]
        zone: Option<String>,

        /// 计算方案 ID
        #[arg(short = 's', long)]
        service_offering: String,

        /// 模板 ID
        #[arg(short, long)]
        template: String,

        /// 虚拟机名称
        #[arg(short, long)]
        name: Option<String>,

        /// 显示名称
        #[arg(long)]
        display_name: Option<String>,

        /// 网络 ID (可重复)
        #[arg(long)]
        network: Vec<String>,

        /// 附加数据盘的磁盘方案 ID
        #[arg(long)]
        disk_offering: Option<String>,

        /// 用户数据文件路径
        #[arg(long)]
        user_data: Option<String>,

        /// 部署后不启动
        #[arg(long)]
        no_start: bool,

        /// 等待任务完成
        #[arg(short, long)]
        wait: bool,
    },

    /// 启动虚拟机
    Start {
        /// 虚拟机 ID
        id: String,

        /// 等待任务完成
        #[arg(short, long)]
        wait: bool,
    },

    /// 停止虚拟机
    Stop {
        /// 虚拟机 ID
        id: String,

        /// 强制停止
        #[arg(long)]
        force: bool,

        /// 等待任务完成
        #[arg(short, long)]
        wait: bool,
    },

    /// 重启虚拟机
    Reboot {
        /// 虚拟机 ID
        id: String,

        /// 等待任务完成
        #[arg(short, long)]
        wait: bool,
    },

    /// 销毁虚拟机
    Destroy {
        /// 虚拟机 ID
        id: String,

        /// 等待任务完成
        #[arg(short, long)]
        wait: bool,
    },
}

#[derive(Subcommand)]
pub enum VolumeAction {
    /// 列出存储卷
    List {
        /// 所属虚拟机 ID
        #[arg(long)]
        vm: Option<String>,

        /// 卷类型 (ROOT/DATADISK)
        #[arg(long = "type")]
        volume_type: Option<String>,

        /// 区域 ID
        #[arg(short, long)]
        zone: Option<String>,

        /// 关键字过滤
        #[arg(short, long)]
        keyword: Option<String>,
    },

    /// 创建数据卷
    Create {
        /// 卷名称
        name: String,

        /// 磁盘方案 ID
        #[arg(long, conflicts_with = "snapshot", required_unless_present = "snapshot")]
        disk_offering: Option<String>,

        /// 源快照 ID
        #[arg(long, conflicts_with = "disk_offering")]
        snapshot: Option<String>,

        /// 区域 ID (未指定时取配置文件中的默认区域)
        #[arg(short, long)]
        zone: Option<String>,

        /// 等待任务完成
        #[arg(short, long)]
        wait: bool,
    },

    /// 挂载卷到虚拟机
    Attach {
        /// 卷 ID
        id: String,

        /// 虚拟机 ID
        #[arg(long)]
        vm: String,

        /// 等待任务完成
        #[arg(short, long)]
        wait: bool,
    },

    /// 从虚拟机卸载卷
    Detach {
        /// 卷 ID
        id: String,

        /// 等待任务完成
        #[arg(short, long)]
        wait: bool,
    },

    /// 调整卷大小
    Resize {
        /// 卷 ID
        id: String,

        /// 新大小 (GB)
        #[arg(long)]
        size: Option<u64>,

        /// 新磁盘方案 ID
        #[arg(long)]
        disk_offering: Option<String>,

        /// 允许缩小
        #[arg(long)]
        shrink_ok: bool,

        /// 等待任务完成
        #[arg(short, long)]
        wait: bool,
    },

    /// 删除卷
    Delete {
        /// 卷 ID
        id: String,

        /// 等待任务完成
        #[arg(short, long)]
        wait: bool,
    },
}

#[derive(Subcommand)]
pub enum NetworkAction {
    /// 列出网络
    List {
        /// 区域 ID
        #[arg(short, long)]
        zone: Option<String>,

        /// 关键字过滤
        #[arg(short, long)]
        keyword: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum TemplateAction {
    /// 列出模板
    List {
        /// 模板过滤器 (featured/self/selfexecutable/sharedexecutable/executable/community)
        #[arg(long, default_value = "executable")]
        filter: String,

        /// 区域 ID
        #[arg(short, long)]
        zone: Option<String>,

        /// 关键字过滤
        #[arg(short, long)]
        keyword: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum OfferingAction {
    /// 列出计算方案
    Service {
        /// 关键字过滤
        #[arg(short, long)]
        keyword: Option<String>,
    },

    /// 列出磁盘方案
    Disk {
        /// 关键字过滤
        #[arg(short, long)]
        keyword: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum SnapshotAction {
    /// 列出快照
    List {
        /// 卷 ID
        #[arg(long)]
        volume: Option<String>,

        /// 关键字过滤
        #[arg(short, long)]
        keyword: Option<String>,
    },

    /// 为卷创建快照
    Create {
        /// 卷 ID
        volume: String,

        /// 等待任务完成
        #[arg(short, long)]
        wait: bool,
    },

    /// 删除快照
    Delete {
        /// 快照 ID
        id: String,

        /// 等待任务完成
        #[arg(short, long)]
        wait: bool,
    },
}

#[derive(Subcommand)]
pub enum TagAction {
    /// 列出标签
    List {
        /// 资源类型 (UserVm/Volume/Snapshot/...)
        #[arg(long)]
        resource_type: Option<String>,

        /// 资源 ID
        #[arg(long)]
        resource_id: Option<String>,

        /// 标签键
        #[arg(long)]
        key: Option<String>,
    },

    /// 为资源创建标签
    Create {
        /// 资源类型
        #[arg(long)]
        resource_type: String,

        /// 资源 ID (可重复)
        #[arg(long = "resource-id", required = true)]
        resource_ids: Vec<String>,

        /// 标签 (key=value，可重复)
        #[arg(short, long, required = true)]
        tag: Vec<String>,

        /// 等待任务完成
        #[arg(short, long)]
        wait: bool,
    },

    /// 删除资源标签
    Delete {
        /// 资源类型
        #[arg(long)]
        resource_type: String,

        /// 资源 ID (可重复)
        #[arg(long = "resource-id", required = true)]
        resource_ids: Vec<String>,

        /// 标签 (key 或 key=value，可重复；不指定时删除全部)
        #[arg(short, long)]
        tag: Vec<String>,

        /// 等待任务完成
        #[arg(short, long)]
        wait: bool,
    },
}

#[derive(Subcommand)]
pub enum ZoneAction {
    /// 列出区域
    List {
        /// 仅列出当前账户可用的区域
        #[arg(long)]
        available: bool,
    },
}

#[derive(Subcommand)]
pub enum JobAction {
    /// 查询任务状态
    Show {
        /// 任务 ID
        id: String,
    },

    /// 等待任务结束
    Wait {
        /// 任务 ID
        id: String,

        /// 超时时间（秒），未指定时使用配置的轮询策略
        #[arg(short, long)]
        timeout: Option<u64>,
    },

    /// 列出任务
    List {
        /// 关键字过滤
        #[arg(short, long)]
        keyword: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志，输出到 stderr 以免干扰 json/yaml 输出
    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("cloudctl 启动");

    let ctx = commands::common::CommandContext::init(cli.config.as_deref(), cli.format.as_deref())?;

    // 处理命令
    match cli.command {
        Commands::Accounts { action } => commands::account::handle_accounts(action, &ctx).await?,
        Commands::Users { action } => commands::account::handle_users(action, &ctx).await?,
        Commands::Vms { action } => commands::vm::handle(action, &ctx).await?,
        Commands::Volumes { action } => commands::volume::handle(action, &ctx).await?,
        Commands::Networks { action } => commands::network::handle(action, &ctx).await?,
        Commands::Templates { action } => commands::catalog::handle_templates(action, &ctx).await?,
        Commands::Offerings { action } => commands::catalog::handle_offerings(action, &ctx).await?,
        Commands::Snapshots { action } => commands::snapshot::handle(action, &ctx).await?,
        Commands::Tags { action } => commands::tag::handle(action, &ctx).await?,
        Commands::Zones { action } => commands::catalog::handle_zones(action, &ctx).await?,
        Commands::Jobs { action } => commands::job::handle(action, &ctx).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_level_after_subcommand() {
        let cli = Cli::try_parse_from(["cloudctl", "vms", "list", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, "debug");
        assert!(matches!(cli.command, Commands::Vms { action: VmAction::List { .. } }));

        let cli = Cli::try_parse_from(["cloudctl", "zones", "list"]).unwrap();
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_volume_create_source_is_exclusive() {
        let err = Cli::try_parse_from([
            "cloudctl",
            "volumes",
            "create",
            "data-1",
            "--disk-offering",
            "5",
            "--snapshot",
            "7",
        ])
        .err()
        .unwrap();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        let err = Cli::try_parse_from(["cloudctl", "volumes", "create", "data-1"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let cli = Cli::try_parse_from(["cloudctl", "volumes", "create", "data-1", "--snapshot", "7"]).unwrap();
        match cli.command {
            Commands::Volumes {
                action: VolumeAction::Create { disk_offering, snapshot, .. },
            } => {
                assert_eq!(disk_offering, None);
                assert_eq!(snapshot.as_deref(), Some("7"));
            }
            _ => panic!("期望 volumes create"),
        }
    }
}
