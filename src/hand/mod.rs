// 手牌の解釈と役, 点数計算を行うモジュール
mod assess;
mod evaluate;
mod fu;
mod generate;
mod group;
mod interpretation;
mod interpreter;
mod point;
mod rank;
mod tenpai;
mod yaku;

pub use self::{
    assess::{assess, HandAssessment},
    evaluate::{evaluate_hand, evaluate_win},
    fu::calc_fu,
    generate::generate,
    group::{GroupType, HandGroup},
    interpretation::{calc_wait, HandInterpretation, HandShape, WaitType},
    interpreter::{
        ChiitoitsuInterpreter, HandInterpreter, KokushimusouInterpreter, NormalInterpreter,
        INTERPRETERS,
    },
    point::{calc_points, get_score_title},
    rank::Rank,
    tenpai::calc_discards_to_tenpai,
    yaku::{YakuContext, YakuDefine, YakuRegistry, YakuRule, YAKUMAN},
};
