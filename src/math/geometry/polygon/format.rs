// src/math/geometry/polygon/format.rs

//! Textform eines Polygons: `(x0,y0,x1,y1,...)` für den äußeren Ring,
//! gefolgt von `,(...)` pro Loch. Das leere Polygon ist `()`.

use crate::math::error::{MathError, MathResult};
use crate::math::geometry::polygon::Polygon;
use crate::math::types::Point2D;
use std::fmt;
use std::str::FromStr;

fn write_ring(f: &mut fmt::Formatter<'_>, ring: &[Point2D]) -> fmt::Result {
    write!(f, "(")?;
    for (i, p) in ring.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{},{}", p.x, p.y)?;
    }
    write!(f, ")")
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_ring(f, self.outer())?;
        for hole in self.holes() {
            write!(f, ",")?;
            write_ring(f, hole)?;
        }
        Ok(())
    }
}

impl FromStr for Polygon {
    type Err = MathError;

    fn from_str(s: &str) -> MathResult<Self> {
        let rings = RingParser::new(s).parse()?;
        let mut rings = rings.into_iter();
        let outer = rings.next().unwrap_or_default();
        if outer.is_empty() {
            return Ok(Polygon::empty());
        }
        Polygon::try_new(outer, rings.collect()).map_err(|err| MathError::Parse {
            position: 0,
            message: err.to_string(),
        })
    }
}

struct RingParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> RingParser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn error(&self, message: impl Into<String>) -> MathError {
        MathError::Parse {
            position: self.pos,
            message: message.into(),
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.input[self.pos..].chars().next()
    }

    fn expect(&mut self, expected: char) -> MathResult<()> {
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += c.len_utf8();
                Ok(())
            }
            Some(c) => Err(self.error(format!("expected '{}', found '{}'", expected, c))),
            None => Err(self.error(format!("expected '{}', found end of input", expected))),
        }
    }

    fn parse(mut self) -> MathResult<Vec<Vec<Point2D>>> {
        let mut rings = vec![self.ring()?];
        while self.peek() == Some(',') {
            self.pos += 1;
            rings.push(self.ring()?);
        }
        if let Some(c) = self.peek() {
            return Err(self.error(format!("unexpected trailing '{}'", c)));
        }
        Ok(rings)
    }

    fn ring(&mut self) -> MathResult<Vec<Point2D>> {
        self.expect('(')?;
        let mut values = Vec::new();
        if self.peek() == Some(')') {
            self.pos += 1;
            return Ok(Vec::new());
        }
        loop {
            values.push(self.number()?);
            match self.peek() {
                Some(',') => self.pos += 1,
                Some(')') => {
                    self.pos += 1;
                    break;
                }
                Some(c) => return Err(self.error(format!("expected ',' or ')', found '{}'", c))),
                None => return Err(self.error("unterminated ring")),
            }
        }
        if values.len() % 2 != 0 {
            return Err(self.error("odd number of coordinates in ring"));
        }
        Ok(values
            .chunks_exact(2)
            .map(|c| Point2D::new(c[0], c[1]))
            .collect())
    }

    fn number(&mut self) -> MathResult<f64> {
        self.skip_whitespace();
        let rest = &self.input[self.pos..];
        let len = rest
            .find(|c: char| c == ',' || c == ')' || c == '(' || c.is_whitespace())
            .unwrap_or(rest.len());
        if len == 0 {
            return Err(self.error("expected a number"));
        }
        let token = &rest[..len];
        let value: f64 = token
            .parse()
            .map_err(|_| self.error(format!("invalid number '{}'", token)))?;
        if !value.is_finite() {
            return Err(self.error(format!("non-finite number '{}'", token)));
        }
        self.pos += len;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::polygon::ShapeGenerators;
    use crate::math::geometry::shapes::RectF;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_display_format() {
        let polygon = Polygon::new(
            RectF::new(0.0, 0.0, 4.0, 4.0).corners().to_vec(),
            vec![RectF::new(1.0, 1.0, 1.5, 1.0).corners().to_vec()],
        );
        assert_eq!(polygon.to_string(), "(0,0,4,0,4,4,0,4),(1,1,2.5,1,2.5,2,1,2)");
        assert_eq!(Polygon::empty().to_string(), "()");
    }

    #[test]
    fn test_round_trip_random_polygons() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..10 {
            let outer = ShapeGenerators::random_simple_polygon(&mut rng, Point2D::new(1.5, -2.0), 3.0, 7.0, 17);
            let hole = ShapeGenerators::create_circle_vertices(Point2D::new(1.5, -2.0), 1.0 / 3.0, 9);
            let polygon = Polygon::new(outer, vec![hole]);
            let parsed: Polygon = polygon.to_string().parse().unwrap();
            assert_eq!(parsed, polygon);
        }
        let empty: Polygon = "()".parse().unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_whitespace_tolerant() {
        let parsed: Polygon = " ( 0 , 0,1, 0 ,\n 1,1 ) ".parse().unwrap();
        assert_eq!(parsed.outer().len(), 3);
    }

    #[test]
    fn test_parse_errors_carry_position() {
        let err = "(0,0,1,0,1,x)".parse::<Polygon>().unwrap_err();
        assert_eq!(
            err,
            MathError::Parse {
                position: 11,
                message: "invalid number 'x'".to_string()
            }
        );
        assert!(matches!("(0,0,1)".parse::<Polygon>(), Err(MathError::Parse { .. })));
        assert!(matches!("(0,0,1,0,1,1".parse::<Polygon>(), Err(MathError::Parse { .. })));
        assert!(matches!("(0,0,1,0,1,1) x".parse::<Polygon>(), Err(MathError::Parse { position: 14, .. })));
        assert!(matches!("(0,0,1,0)".parse::<Polygon>(), Err(MathError::Parse { .. })));
    }
}
