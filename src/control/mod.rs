// 牌山の生成など対局の進行に関わる処理
pub mod wall;
