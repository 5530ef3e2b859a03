use mahjong_hand::{debug, error};
use mahjong_hand::hand::*;
use mahjong_hand::model::*;
use mahjong_hand::util::misc::*;
use mahjong_hand::util::string::*;

#[derive(Debug)]
pub struct WaitsApp {
    args: Vec<String>,
    json: bool,
}

impl WaitsApp {
    pub fn new(args: Vec<String>) -> Self {
        Self { args, json: false }
    }

    pub fn run(&mut self) {
        let mut exp = "".to_string();
        for s in &self.args {
            match s.as_str() {
                "-j" => self.json = true,
                _ => {
                    if s.starts_with('-') {
                        error!("unknown option: {}", s);
                        return;
                    }
                    exp = s.clone();
                }
            }
        }

        if exp.is_empty() {
            print_usage();
            return;
        }

        if let Err(e) = self.process_expression(&exp) {
            error!("{}", e);
        }
    }

    fn process_expression(&self, exp: &str) -> Res {
        let hand = parse_hand(exp)?;
        debug!("hand: {}", hand);
        let n = hand.tiles().len() + hand.melds().len() * 3;
        match n {
            13 => self.print_waits(&hand),
            14 => self.print_discards(&hand),
            _ => Err(format!("invalid number of tiles: {}", n))?,
        }
    }

    // 聴牌形の手牌の解釈と和了牌
    fn print_waits(&self, hand: &Hand) -> Res {
        let a = assess(hand);
        if self.json {
            println!("{}", serde_json::to_string(&a)?);
            return Ok(());
        }

        for ip in &a.interpretations {
            let gs: Vec<String> = ip.groups.iter().map(|g| g.to_string()).collect();
            println!(
                "{:?} [{}] {} {:?} {}",
                ip.shape,
                gs.join(" "),
                tiles_to_string(&ip.ungrouped),
                ip.wait_type,
                vec_to_string(&ip.waits),
            );
        }
        println!("waits: {}", vec_to_string(&a.waits()));
        Ok(())
    }

    // 聴牌となる打牌と待ち
    fn print_discards(&self, hand: &Hand) -> Res {
        let res = calc_discards_to_tenpai(hand);
        if self.json {
            println!("{}", serde_json::to_string(&res)?);
            return Ok(());
        }

        if res.is_empty() {
            println!("no tenpai discard");
        }
        for (d, waits) in &res {
            println!("discard: {}, waits: {}", d, vec_to_string(waits));
        }
        Ok(())
    }
}

// HAND[,MELD...]
fn parse_hand(input: &str) -> Res<Hand> {
    let input = input.replace(' ', "");
    let mut exps = input.split(',');
    let tiles = tiles_from_string(exps.next().unwrap_or(""))?;
    let mut melds = vec![];
    for exp in exps {
        melds.push(meld_from_string(exp)?);
    }
    Ok(Hand::new(tiles, melds))
}

fn print_usage() {
    error!(
        r"invalid input
Usage
    $ cargo run W HAND[,MELD...] [-j]
    ex) m123p456s789z1122   (13枚: 待ちの一覧)
    ex) m123p456s789z11223  (14枚: 聴牌となる打牌の一覧)
Options
    -j: print result as json
"
    );
}

#[test]
fn test_parse_hand() {
    let hand = parse_hand("m123p456z11, s7+89").unwrap();
    assert_eq!(hand.tiles().len(), 8);
    assert_eq!(hand.melds().len(), 1);
    assert!(hand.is_open());

    assert!(parse_hand("m123x").is_err());
    assert!(parse_hand("m123,s78").is_err());
}

#[test]
fn test_waits_app() {
    let app = WaitsApp::new(vec![]);
    assert!(app.process_expression("m123p456s789z1122").is_ok());
    assert!(app.process_expression("m123p456s789z11223").is_ok());
    assert!(app.process_expression("m123p456s789z11").is_err());
}
