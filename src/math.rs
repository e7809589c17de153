#[macro_export]
/// Implementation of the Kahan-Babushka-Neumaier algorithm for reduced numerical error in summation
///
/// Each `var += expr;` line declares an `f64` accumulator named `var` in the enclosing scope.
///
/// <https://en.wikipedia.org/wiki/Kahan_summation_algorithm#Further_enhancements>
macro_rules! kbn_summation {
    (for $pat: pat in $expr: expr => {
        $($var: ident += $var_expr: expr;)*
    }) => {
        let ($($var,)*) = {
            use paste::paste;
            paste! {
                $(
                    let mut $var: f64 = 0.;
                    let mut [<$var _compensation>] = 0.;
                )*
                for $pat in $expr {
                    $(
                        let input = $var_expr;
                        let t = $var + input;
                        [<$var _compensation>] += if $var.abs() >= input.abs() {
                            ($var - t) + input
                        } else {
                            (input - t) + $var
                        };
                        $var = t;
                    )*
                }
                ($($var + [<$var _compensation>],)*)
            }
        };
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_summation_of_edge_lengths() {
        // Tiny edges after a huge one vanish in naive summation
        let edges = [1e16, 1., 1., 1., 1., -1e16];
        kbn_summation! {
            for edge in edges => {
                length += edge;
                count += 1.;
            }
        }

        assert_eq!(edges.iter().sum::<f64>(), 0.);
        assert_eq!(length, 4.);
        assert_eq!(count, 6.);
    }
}
