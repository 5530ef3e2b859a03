use std::fmt::Write;
use std::fs::File;
use std::io::{self, BufRead};

use mahjong_hand::{error, info, warn};
use mahjong_hand::hand::evaluate_win;
use mahjong_hand::model::*;
use mahjong_hand::util::misc::*;
use mahjong_hand::util::string::*;

#[derive(Debug)]
pub struct CalculatorApp {
    args: Vec<String>,
    detail: bool,
    json: bool,
}

impl CalculatorApp {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            detail: false,
            json: false,
        }
    }

    pub fn run(&mut self) {
        let mut file_path = "".to_string();
        let mut exp = "".to_string();
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-d" => self.detail = true,
                "-j" => self.json = true,
                "-f" => file_path = next_value(&mut it, s),
                _ => {
                    if s.starts_with('-') {
                        error!("unknown option: {}", s);
                        return;
                    }
                    if !exp.is_empty() {
                        error!("multiple expression is not allowed");
                        return;
                    }
                    exp = s.clone();
                }
            }
        }

        if file_path.is_empty() == exp.is_empty() {
            print_usage();
            return;
        }

        let res = if !exp.is_empty() {
            self.process_expression(&exp).map(|_| ())
        } else {
            self.run_from_file(&file_path)
        };
        if let Err(e) = res {
            error!("{}", e);
        }
    }

    fn run_from_file(&self, file_path: &str) -> Res {
        let file = File::open(file_path)?;
        let lines = io::BufReader::new(file).lines();
        let (mut n_ok, mut n_err) = (0, 0);
        for exp in lines.map_while(Result::ok) {
            let e = exp.replace(' ', "");
            if e.is_empty() || e.starts_with('#') {
                // 空行とコメント行はスキップ
                println!("> {}", exp);
            } else {
                match self.process_expression(&exp) {
                    Ok(Verify::Ok) => n_ok += 1,
                    Ok(Verify::Error) => {
                        warn!("verify failed: {}", exp);
                        n_err += 1;
                    }
                    Ok(Verify::Skip) => {}
                    Err(e) => {
                        error!("{}", e);
                        n_err += 1;
                    }
                }
            }
            println!();
        }
        info!("verify ok: {}, error: {}", n_ok, n_err);
        Ok(())
    }

    fn process_expression(&self, exp: &str) -> Res<Verify> {
        let mut calculator = Calculator::new(self.detail, self.json);
        calculator.parse(exp)?;
        calculator.run()
    }
}

#[derive(Debug, PartialEq)]
enum Verify {
    Ok,
    Error,
    Skip,
}

#[derive(Debug)]
struct Calculator {
    detail: bool,
    json: bool,
    // evaluate_win params
    round: RoundContext,
    seat: SeatContext,
    hand: Hand,
    winning_tile: Option<Tile>,
    win_type: WinType,
    // score verify
    verify: bool,
    fu: usize,
    fan: usize,
    score: Point,
}

impl Calculator {
    fn new(detail: bool, json: bool) -> Self {
        Self {
            detail,
            json,
            round: RoundContext::default(),
            seat: SeatContext::default(),
            hand: Hand::default(),
            winning_tile: None,
            win_type: WinType::Tsumo,
            verify: false,
            fu: 0,
            fan: 0,
            score: 0,
        }
    }

    fn parse(&mut self, input: &str) -> Res {
        println!("> {}", input);

        let input = input.replace(' ', "");
        let input = input.split('#').next().unwrap_or(""); // コメント削除
        let exps: Vec<&str> = input.split('/').collect();
        let len = exps.len();
        if len > 1 {
            self.parse_stage_info(exps[1])?;
        };
        if len > 0 {
            self.parse_hand_meld(exps[0])?;
        };
        if len > 2 {
            self.parse_yaku_flags(exps[2])?;
        };
        if len > 3 {
            self.parse_score_verify(exps[3])?;
        }
        if len > 4 {
            Err(format!("too many sections: {}", input))?;
        }

        if self.detail {
            println!("{:?}", self);
        }

        Ok(())
    }

    fn run(&self) -> Res<Verify> {
        let winning_tile = self.winning_tile.ok_or("winning tile not specified")?;
        let res = evaluate_win(
            &self.round,
            &self.seat,
            &self.hand,
            winning_tile,
            self.win_type,
        );

        let verify = if let Some(ctx) = res {
            if self.json {
                println!("{}", serde_json::to_string(&ctx)?);
            } else {
                if self.detail {
                    println!("{:?}", ctx);
                }

                let mut yakus = "".to_string();
                for y in &ctx.yakus {
                    let _ = write!(yakus, "{}({}), ", y.name, y.fan);
                }
                println!("yakus: {}", yakus);

                println!(
                    "fu: {}, fan: {}, yakuman: {}, score: {}, {}",
                    ctx.fu, ctx.fan, ctx.yakuman, ctx.score, ctx.title
                );
            }

            if !self.verify {
                Verify::Skip
            } else if ctx.yakuman > 0 {
                // 役満以上は得点のみをチェック
                if ctx.score == self.score {
                    Verify::Ok
                } else {
                    Verify::Error
                }
            } else if ctx.fu == self.fu && ctx.fan == self.fan && ctx.score == self.score {
                Verify::Ok
            } else {
                Verify::Error
            }
        } else {
            println!("not win hand");
            if !self.verify {
                Verify::Skip
            } else if self.score == 0 {
                Verify::Ok
            } else {
                Verify::Error
            }
        };
        println!("verify: {:?}", verify);
        Ok(verify)
    }

    // 場風と自風, ドラ表示牌, 裏ドラ表示牌
    fn parse_stage_info(&mut self, input: &str) -> Res {
        let exps: Vec<&str> = input.split(',').collect();
        let len = exps.len();
        if len > 0 {
            let chars: Vec<char> = exps[0].chars().collect();
            if chars.len() != 2 {
                Err(format!("stage info len is not 2: {}", exps[0]))?;
            }
            self.round.prevalent_wind = wind_from_char(chars[0])?;
            self.seat.seat_wind = wind_from_char(chars[1])?;
        }
        if len > 1 {
            self.round.doras = tiles_from_string(exps[1])?;
        }
        if len > 2 {
            self.round.ura_doras = tiles_from_string(exps[2])?;
        }
        Ok(())
    }

    // 手牌の最後の牌が和了牌. 末尾に'+'がある場合はロン和了.
    fn parse_hand_meld(&mut self, input: &str) -> Res {
        let mut exp_hand = "".to_string();
        let mut exp_melds = vec![];
        for exp in input.split(',') {
            if exp_hand.is_empty() {
                if exp.ends_with('+') {
                    self.win_type = WinType::Ron;
                }
                exp_hand = exp.replace('+', "");
            } else {
                exp_melds.push(exp.to_string());
            }
        }

        let mut tiles = tiles_from_string(&exp_hand)?;
        self.winning_tile = tiles.pop();
        if self.winning_tile.is_none() {
            Err(format!("empty hand: {}", input))?;
        }

        let mut melds = vec![];
        for exp_meld in &exp_melds {
            melds.push(meld_from_string(exp_meld)?);
        }
        if tiles.len() + melds.len() * 3 != 13 {
            Err(format!("invalid number of tiles: {}", input))?;
        }
        self.hand = Hand::new(tiles, melds);

        Ok(())
    }

    fn parse_yaku_flags(&mut self, input: &str) -> Res {
        for y in input.split(',') {
            match y {
                "立直" => self.seat.is_riichi = true,
                "両立直" => {
                    self.seat.is_riichi = true;
                    self.seat.is_daburii = true;
                }
                "一発" => self.seat.is_ippatsu = true,
                "海底摸月" | "河底撈魚" => self.round.wall_count = 0,
                "嶺上開花" => {
                    if self.win_type != WinType::Tsumo {
                        Err(format!("{} requires tsumo", y))?;
                    }
                    self.win_type = WinType::Rinshan;
                }
                "槍槓" => {
                    if self.win_type != WinType::Ron {
                        Err(format!("{} requires ron", y))?;
                    }
                    self.win_type = WinType::Chankan;
                }
                "天和" | "地和" => self.seat.is_first_draw = true,
                "" => {}
                _ => Err(format!("invalid conditional yaku: {}", y))?,
            }
        }
        Ok(())
    }

    fn parse_score_verify(&mut self, input: &str) -> Res {
        let exps: Vec<&str> = input.split(',').collect();
        if exps.len() != 3 {
            Err(format!("invalid score verify info: {}", input))?;
        }
        self.fu = exps[0].parse::<usize>()?;
        self.fan = exps[1].parse::<usize>()?;
        self.score = exps[2].parse::<Point>()?;
        self.verify = true;
        Ok(())
    }
}

fn print_usage() {
    error!(
        r"invalid input
Usage
    $ cargo run C EXPRESSION [-d] [-j]
    $ cargo run C -f FILE [-d] [-j]
Expression
    HAND[+][,MELD...][/WINDS[,DORAS[,URADORAS]]][/FLAGS][/FU,FAN,SCORE]
    ex) m123p456s789z1122+/ES,p1/立直/40,2,2600
Options
    -d: print debug info
    -j: print result as json
    -f: read expressions from file instead of a commandline expression
"
    );
}

#[test]
fn test_calculator() {
    let file = File::open("tests/win_hands.txt").unwrap();
    let lines = io::BufReader::new(file).lines();
    for exp in lines.map_while(Result::ok) {
        let e = exp.replace(' ', "");
        if e.is_empty() || e.starts_with('#') {
            // 空行とコメント行はスキップ
            println!("> {}", exp);
        } else {
            let mut calculator = Calculator::new(false, false);
            calculator.parse(&e).unwrap();
            assert_ne!(Verify::Error, calculator.run().unwrap(), "{}", exp);
        }
    }
}

#[test]
fn test_calculator_parse_error() {
    let mut c = Calculator::new(false, false);
    assert!(c.parse("m123p456s789z11").is_err()); // 枚数不足
    let mut c = Calculator::new(false, false);
    assert!(c.parse("m123p456s789z1122/EX").is_err());
    let mut c = Calculator::new(false, false);
    assert!(c.parse("m123p456s789z1122+/EE//嶺上開花").is_err());
    let mut c = Calculator::new(false, false);
    assert!(c.parse("m123p456s789z1122/EE//立直,一発/30,1").is_err());
}
