//! Structured analysis report
//!
//! A read-only companion document to the catalog: intro, meta-logic rules,
//! core framework (with principle-id references), protocol sections, key
//! insight and summary. Static data; id references resolve through
//! `PrincipleItem::find` and unknown ids render as "no match" downstream.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MetaRule {
    pub title: &'static str,
    pub description: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct MetaLogic {
    pub title: &'static str,
    pub description: &'static str,
    pub rules: &'static [MetaRule],
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameworkPoint {
    pub label: &'static str,
    /// Referenced principle ids; rendering must tolerate unknown ids
    pub ids: &'static [u32],
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoreFramework {
    pub title: &'static str,
    pub description: &'static str,
    pub points: &'static [FrameworkPoint],
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSection {
    pub title: &'static str,
    pub content: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyInsight {
    pub title: &'static str,
    pub description: &'static str,
    pub points: &'static [&'static str],
    pub highlight: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub intro: &'static str,
    pub meta_logic: MetaLogic,
    pub core_framework: CoreFramework,
    pub key_insight: KeyInsight,
    pub sections: &'static [ReportSection],
    pub summary: &'static str,
}

pub const ANALYSIS_REPORT: AnalysisReport = AnalysisReport {
    intro: "SYSTEM DIAGNOSTIC: 本次分析针对 35 条核心原则进行结构化解构。该协议不仅是一组建议，更是一套完整的「反脆弱操作系统」。它强调在极端不确定性中建立秩序，通过主动的风险管理和注意力分配，实现个体生存质量的最大化。",
    meta_logic: MetaLogic {
        title: "KERNEL LEVEL // 底层元逻辑",
        description: "检测到 4 条隐含的系统级规则，这些规则支配着上层应用层的行为。",
        rules: &[
            MetaRule {
                title: "RULE_01: 非对称博弈 (Asymmetry)",
                description: "纳西姆·塔勒布式架构",
                points: &[
                    "限制下行风险 (Cap Downside): 确保任何失败都不会导致系统崩溃 (Ref: #28, #34)。",
                    "无限上行空间 (Uncapped Upside): 暴露在正面黑天鹅事件中 (Ref: #15, #20)。",
                    "操作策略: 快速迭代，低成本试错。",
                ],
            },
            MetaRule {
                title: "RULE_02: 资源稀缺性 (Scarcity)",
                description: "注意力 > 时间 > 金钱",
                points: &[
                    "CPU 限制: 你的认知带宽是极其有限的。",
                    "过滤机制: “如果不是绝对Yes，就是No” 是最高效的防火墙 (Ref: #17)。",
                    "聚焦策略: 拒绝平庸的机会，只为头部机会分配算力。",
                ],
            },
            MetaRule {
                title: "RULE_03: 流动性身份 (Fluid Identity)",
                description: "避免硬编码",
                points: &[
                    "身份固化是成长的死锁 (Deadlock)。",
                    "保持“从零开始”的兼容性 (Ref: #12)。",
                    "不依赖外部结果来定义系统完整性 (Ref: #09, #35)。",
                ],
            },
            MetaRule {
                title: "RULE_04: 退出权 (Exit Rights)",
                description: "自由的定义",
                points: &[
                    "真正的控制权在于“随时切断连接”的能力 (Ref: #33)。",
                    "不被沉没成本绑架，不被名声锁定 (Ref: #18)。",
                    "最终的退出是死亡，认知它能优化运行时的性能 (Ref: #24)。",
                ],
            },
        ],
    },
    core_framework: CoreFramework {
        title: "SYSTEM ARCHITECTURE // 核心架构",
        description: "整个系统的运行依赖于三个主要模块的协同。",
        points: &[
            FrameworkPoint {
                label: "MODULE_A: RELATION (连接)",
                ids: &[1, 3, 14, 22, 23, 25],
                description: "网络拓扑结构。决定了信息输入的质量和系统的抗干扰能力。核心算法：筛选强节点，屏蔽噪声节点。",
            },
            FrameworkPoint {
                label: "MODULE_B: MISSION (计算)",
                ids: &[1, 2, 4, 15, 19, 20, 30],
                description: "核心处理进程。定义了系统的吞吐量和产出。核心算法：寻找独特性（垄断性）任务，进行高频迭代。",
            },
            FrameworkPoint {
                label: "MODULE_C: ENVIRONMENT (环境)",
                ids: &[1, 5, 26, 31],
                description: "运行沙箱。物理和数字环境决定了系统的底层参数。核心算法：选择对失败者友好的生态系统。",
            },
        ],
    },
    key_insight: KeyInsight {
        title: "DECODED MESSAGE // 核心洞察",
        description: "对系统日志的深度分析揭示了一个隐藏的真理。",
        points: &[
            "大多数协议教你如何 Overclock (超频) —— 更快、更强、更赢。",
            "本协议教你如何防止 Overheat (过热) 和 System Failure (系统崩溃)。",
            "目标不是短暂的峰值性能，而是长周期的稳定运行 (Uptime)。",
        ],
        highlight: "这不是一套成功学，这是一套「防自毁」的系统工程学。",
    },
    sections: &[
        ReportSection {
            title: "PROTOCOL: 迭代与容错",
            content: &[
                "系统稳定性建立在大量的微小失败之上，而非完美的预测。",
                "将错误视为数据输入，而非系统故障 (#10, #11)。",
                "在安全沙箱中进行高频测试，避免在生产环境中进行不可逆操作 (#34)。",
            ],
        },
        ReportSection {
            title: "PROTOCOL: 能量守恒",
            content: &[
                "能量（意志力/注意力）是不可再生资源，需极度节约。",
                "切断与耗能组件（悲观者、无意义社交）的连接 (#3)。",
                "将能量集中在长半衰期的事务上 (#30)。",
            ],
        },
    ],
    summary: "ZENITH PROTOCOL 是一套为高熵环境设计的生存算法。它建议用户放弃线性的路径规划，转而构建一个模块化、可插拔、高冗余的人生系统。通过底层原则的约束，确保在面对黑天鹅事件时，系统不仅能存活，还能从中获益。",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::principles::PrincipleItem;

    #[test]
    fn report_structure_is_complete() {
        assert!(!ANALYSIS_REPORT.intro.is_empty());
        assert_eq!(ANALYSIS_REPORT.meta_logic.rules.len(), 4);
        assert_eq!(ANALYSIS_REPORT.core_framework.points.len(), 3);
        assert_eq!(ANALYSIS_REPORT.sections.len(), 2);
        assert!(!ANALYSIS_REPORT.summary.is_empty());
    }

    #[test]
    fn framework_references_resolve_to_known_principles() {
        for point in ANALYSIS_REPORT.core_framework.points {
            for id in point.ids {
                assert!(
                    PrincipleItem::find(*id).is_some(),
                    "framework point {} references unknown id {}",
                    point.label,
                    id
                );
            }
        }
    }
}
