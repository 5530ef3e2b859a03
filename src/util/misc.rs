use std::fmt;

use crate::error;

pub type Res<T = ()> = Result<T, Box<dyn std::error::Error>>;

pub fn next_value<T>(it: &mut std::slice::Iter<'_, std::string::String>, opt: &str) -> T
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let n = it
        .next()
        .unwrap_or_else(|| error_exit(format!("{}: value missing", opt)));
    n.parse()
        .unwrap_or_else(|e| error_exit(format!("{}: {} '{}'", opt, e, n)))
}

pub fn error_exit<T: fmt::Display, U>(t: T) -> U {
    error!("{}", t);
    std::process::exit(1);
}

pub fn vec_count<T: PartialEq>(v: &[T], e: &T) -> usize {
    v.iter().filter(|&n| n == e).count()
}

pub fn vec_to_string<T: fmt::Display>(v: &[T]) -> String {
    let vs: Vec<String> = v.iter().map(|x| format!("{}", x)).collect();
    "[".to_string() + &vs.join(", ") + "]"
}

#[test]
fn test_vec_helpers() {
    assert_eq!(vec_count(&[1, 0, 1, 1], &1), 3);
    assert_eq!(vec_to_string(&[1, 2, 3]), "[1, 2, 3]");
    assert_eq!(vec_to_string::<usize>(&[]), "[]");
}
