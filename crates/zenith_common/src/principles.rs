//! Principle catalog - the 35 life principles
//!
//! Pure static data. Loaded once into the binary, never mutated, safe to
//! share. Identity is `id`; the catalog preserves its original order.

use serde::{Deserialize, Serialize};

/// Closed category set for the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Core,
    Strategy,
    Mindset,
    Relation,
    System,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Core => "CORE",
            Category::Strategy => "STRATEGY",
            Category::Mindset => "MINDSET",
            Category::Relation => "RELATION",
            Category::System => "SYSTEM",
        }
    }

    /// All categories, in catalog display order
    pub fn all() -> &'static [Category] {
        &[
            Category::Core,
            Category::Strategy,
            Category::Mindset,
            Category::Relation,
            Category::System,
        ]
    }
}

/// One catalog entry
#[derive(Debug, Clone, Serialize)]
pub struct PrincipleItem {
    pub id: u32,
    pub category: Category,
    pub title: &'static str,
    pub content: &'static str,
    pub points: &'static [&'static str],
}

impl PrincipleItem {
    /// Look up a principle by id. Unknown ids are "no match", not an error.
    pub fn find(id: u32) -> Option<&'static PrincipleItem> {
        PRINCIPLES.iter().find(|p| p.id == id)
    }
}

/// Filter the catalog by category. `None` returns the full catalog.
/// Original relative order is preserved either way.
pub fn filter(category: Option<Category>) -> Vec<&'static PrincipleItem> {
    PRINCIPLES
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .collect()
}

pub const PRINCIPLES: [PrincipleItem; 35] = [
    PrincipleItem {
        id: 1,
        category: Category::Core,
        title: "人生基本盘",
        content: "人生最重要的三项决定是：和谁在一起，做什么事，以及在哪里生活。",
        points: &["这三者决定了你人生的基本盘。", "其余决策皆为次要。"],
    },
    PrincipleItem {
        id: 2,
        category: Category::Mindset,
        title: "注意力资源",
        content: "你人生中最宝贵的资源不是金钱或时间，而是你的注意力。",
        points: &["谨慎地选择你关注的事物。", "你关注什么，你就成为了什么。"],
    },
    PrincipleItem {
        id: 3,
        category: Category::Relation,
        title: "拒绝负能量",
        content: "不要与愤世嫉俗者和悲观主义者合作。",
        points: &["他们的信念会自我实现。", "最终拖垮整个项目。"],
    },
    PrincipleItem {
        id: 4,
        category: Category::Strategy,
        title: "欲望管理",
        content: "如果你想成功，必须精挑细选你的欲望。",
        points: &["欲望分散会导致精力分散。", "专注是成功的必要条件。"],
    },
    PrincipleItem {
        id: 5,
        category: Category::Strategy,
        title: "物质与自由",
        content: "先追求物质成功，再寻求精神自由，是更现实的路径。",
        points: &[
            "赢得人生这场游戏的目的，是为了最终能从中解脱出来。",
            "自由需要物质基础。",
        ],
    },
    PrincipleItem {
        id: 6,
        category: Category::Mindset,
        title: "旅程即回报",
        content: "享受旅程本身，因为旅程即是回报。",
        points: &["不要推迟满足感。", "当下即是全部。"],
    },
    PrincipleItem {
        id: 7,
        category: Category::Mindset,
        title: "非执着",
        content: "对一件事物越不执着，你就越能以一种自然、真实的方式去做它。",
        points: &["你会因为热爱而做，而不是为了结果。", "执着是焦虑的根源。"],
    },
    PrincipleItem {
        id: 8,
        category: Category::Mindset,
        title: "幸福本质",
        content: "幸福的本质，是满足于现状，不感觉此刻有任何缺失。",
        points: &["它是一种内在的平和。", "不依赖外部条件的改变。"],
    },
    PrincipleItem {
        id: 9,
        category: Category::Mindset,
        title: "自尊构建",
        content: "自尊是你与自己建立的声誉。",
        points: &[
            "建立自尊的最好方式是严格遵守自己的道德准则。",
            "如果你都不喜欢自己，外部世界将是无法逾越的挑战。",
        ],
    },
    PrincipleItem {
        id: 10,
        category: Category::Strategy,
        title: "学习即纠错",
        content: "所有学习的本质都是纠错。",
        points: &[
            "如果你真的在学习，那你大部分时间都将是“错误”的。",
            "需要不断更新认知。",
        ],
    },
    PrincipleItem {
        id: 11,
        category: Category::Strategy,
        title: "快速迭代",
        content: "成功的关键不是避免失败，而是增加尝试的次数。",
        points: &["现代社会对失败的容忍度极高。", "从每次失败中学习并快速迭代。"],
    },
    PrincipleItem {
        id: 12,
        category: Category::Strategy,
        title: "失败者优势",
        content: "从失败的身份开始，可能是一种优势。",
        points: &["你一无所有，所以没有包袱。", "拥有从零开始、不畏惧失败的勇气。"],
    },
    PrincipleItem {
        id: 13,
        category: Category::Mindset,
        title: "直觉决策",
        content: "在重大、模糊的人生选择上，要相信经过经验磨砺的直觉。",
        points: &["理性只是事后的合理化工具。", "真正的理解是从第一性原理出发。"],
    },
    PrincipleItem {
        id: 14,
        category: Category::Relation,
        title: "不改变他人",
        content: "你无法改变他人，但可以改变自己。",
        points: &[
            "别指望改变你的伴侣或朋友。",
            "他们只会因为自己顿悟或创伤而改变。",
        ],
    },
    PrincipleItem {
        id: 15,
        category: Category::Core,
        title: "逃离竞争",
        content: "通过做独一无二的自己，来逃离竞争。",
        points: &[
            "找到那件对你来说是玩乐，但对别人来说是工作的事情。",
            "将它“产品化”。",
        ],
    },
    PrincipleItem {
        id: 16,
        category: Category::Strategy,
        title: "短期痛苦原则",
        content: "如果你在两个选项间犹豫不决，选那个在短期内更痛苦的。",
        points: &["大脑天生会夸大眼前的痛苦。", "这条路往往通向长期的更大利益。"],
    },
    PrincipleItem {
        id: 17,
        category: Category::Strategy,
        title: "绝对Yes原则",
        content: "如果你无法决定，那答案就是“不”。",
        points: &[
            "只抓住那些让你毫不犹豫、内心大喊 “Yes!” 的机会。",
            "拒绝模棱两可。",
        ],
    },
    PrincipleItem {
        id: 18,
        category: Category::Core,
        title: "名声陷阱",
        content: "名声最好是作为创造价值的副产品而获得。",
        points: &["为了名声而追求名声，是一个空洞且危险的陷阱。"],
    },
    PrincipleItem {
        id: 19,
        category: Category::Strategy,
        title: "捕捉灵感",
        content: "灵感是易逝品，必须立即行动。",
        points: &[
            "不受日程束缚的自由生活，能最大限度地抓住灵感。",
            "实现最高效率。",
        ],
    },
    PrincipleItem {
        id: 20,
        category: Category::Strategy,
        title: "有效迭代",
        content: "掌握任何技能的关键是迭代次数，而不是小时数。",
        points: &["不是重复一万小时。", "是进行一万次带有学习和纠错的迭代。"],
    },
    PrincipleItem {
        id: 21,
        category: Category::Strategy,
        title: "延迟满足",
        content: "你人生的高度，取决于你愿意承受多大的短期痛苦。",
        points: &["几乎所有重大的回报，都来自于对眼前诱惑的延迟满足。"],
    },
    PrincipleItem {
        id: 22,
        category: Category::Relation,
        title: "有限尊重",
        content: "你只需要得到你所尊重的那极少数人的尊重。",
        points: &["试图从大众那里获得认可，是徒劳无功的。"],
    },
    PrincipleItem {
        id: 23,
        category: Category::Relation,
        title: "真正的阿尔法",
        content: "真正的领导者不是先吃的人，而是确保每个人都吃饱后最后一个吃的人。",
        points: &["健康社会的标志，是奖励那些为群体做出贡献的人。"],
    },
    PrincipleItem {
        id: 24,
        category: Category::Mindset,
        title: "死亡均衡器",
        content: "认识到一切终将归零，会让你放下许多不必要的焦虑和执着。",
        points: &["生命短暂，死亡是最终的均衡器。", "专注于活在当下。"],
    },
    PrincipleItem {
        id: 25,
        category: Category::Relation,
        title: "育儿核心",
        content: "育儿的核心是提供无条件的爱，并保护孩子的能动性。",
        points: &[
            "目标不是培养“训练有素的狗”。",
            "而是养育“能自我生存的狼”。",
        ],
    },
    PrincipleItem {
        id: 26,
        category: Category::System,
        title: "科技变量",
        content: "关注那些可能颠覆底层逻辑的科技进步（如 GLP-1）。",
        points: &[
            "它们将深刻改变社会健康、成瘾治疗和医疗成本。",
            "影响远超表面。",
        ],
    },
    PrincipleItem {
        id: 27,
        category: Category::Strategy,
        title: "非线性路径",
        content: "避免线性人生路径（读书→工作→晋升），因为其失败不可逆且风险集中。",
        points: &["并行尝试。", "低成本试错。", "快速放弃。"],
    },
    PrincipleItem {
        id: 28,
        category: Category::Strategy,
        title: "下限设计",
        content: "永远为“最坏情况”设计一个可接受的下限。",
        points: &[
            "问自己：如果彻底失败，是否仍能体面生存？",
            "如果答案是Yes，即可下注。",
        ],
    },
    PrincipleItem {
        id: 29,
        category: Category::Strategy,
        title: "不确定性成长",
        content: "把“确定性痛苦”换成“不确定性成长”。",
        points: &[
            "舒适区是可预测的缓慢衰退。",
            "追求短期痛苦确定、长期收益无限的分布。",
        ],
    },
    PrincipleItem {
        id: 30,
        category: Category::System,
        title: "长期优化",
        content: "不要优化你不打算长期做的事。",
        points: &[
            "如果不愿意做10年，就不必追求效率。",
            "只需尽快验证是否值得留下。",
        ],
    },
    PrincipleItem {
        id: 31,
        category: Category::System,
        title: "系统选择",
        content: "判断一个系统是否值得参与，看它如何对待失败者。",
        points: &[
            "如果失败者被羞辱且无法再次入场，系统迟早崩溃。",
            "不值得投入人生筹码。",
        ],
    },
    PrincipleItem {
        id: 32,
        category: Category::Strategy,
        title: "解释性陷阱",
        content: "不要让“可被解释性”成为决策前提。",
        points: &[
            "重要选择早期往往不可解释。",
            "逻辑不完整，只能被事后证明。",
        ],
    },
    PrincipleItem {
        id: 33,
        category: Category::Mindset,
        title: "随时退出权",
        content: "真正的长期主义不是熬，而是随时可退。",
        points: &[
            "每天都自愿留下，而非被沉没成本绑架。",
            "不能随时退出的是困境。",
        ],
    },
    PrincipleItem {
        id: 34,
        category: Category::System,
        title: "不可修正风险",
        content: "真正的风险不是失败，而是“不可修正”。",
        points: &[
            "极力规避声誉不可修复、身体不可逆损伤、心智僵化。",
            "其他失败皆可接受。",
        ],
    },
    PrincipleItem {
        id: 35,
        category: Category::Mindset,
        title: "原则性自尊",
        content: "把“自我认同”建立在原则上，而不是结果上。",
        points: &[
            "建立在结果上会恐惧失败。",
            "建立在原则上可以重来，可以清零。",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_35_entries_with_unique_ascending_ids() {
        assert_eq!(PRINCIPLES.len(), 35);
        for (i, p) in PRINCIPLES.iter().enumerate() {
            assert_eq!(p.id, i as u32 + 1);
            assert!(!p.title.is_empty());
            assert!(!p.content.is_empty());
            assert!(!p.points.is_empty());
        }
    }

    #[test]
    fn find_resolves_known_ids() {
        let p = PrincipleItem::find(17).unwrap();
        assert_eq!(p.category, Category::Strategy);
        assert_eq!(p.title, "绝对Yes原则");
    }

    #[test]
    fn find_unknown_id_is_no_match() {
        assert!(PrincipleItem::find(0).is_none());
        assert!(PrincipleItem::find(36).is_none());
        assert!(PrincipleItem::find(9999).is_none());
    }

    #[test]
    fn filter_by_category_preserves_relative_order() {
        let strategy = filter(Some(Category::Strategy));
        assert!(strategy.iter().all(|p| p.category == Category::Strategy));
        let ids: Vec<u32> = strategy.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn filter_without_category_returns_full_catalog_in_order() {
        let all = filter(None);
        assert_eq!(all.len(), PRINCIPLES.len());
        let ids: Vec<u32> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=35).collect::<Vec<u32>>());
    }

    #[test]
    fn every_category_has_at_least_one_entry() {
        for c in Category::all() {
            assert!(
                !filter(Some(*c)).is_empty(),
                "category {} has no entries",
                c.as_str()
            );
        }
    }

    #[test]
    fn category_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&Category::Strategy).unwrap(),
            "\"STRATEGY\""
        );
        let parsed: Category = serde_json::from_str("\"CORE\"").unwrap();
        assert_eq!(parsed, Category::Core);
    }
}
