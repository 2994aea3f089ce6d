//! Table of action values.
use crate::{explorer::greedy, QTableError};
use log::info;
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

/// Action values of every state, zero-initialised.
#[derive(Debug, Clone, PartialEq)]
pub struct QTable {
    n_states: usize,
    n_actions: usize,
    values: Vec<f64>,
}

impl QTable {
    pub fn new(n_states: usize, n_actions: usize) -> Self {
        Self {
            n_states,
            n_actions,
            values: vec![0.0; n_states * n_actions],
        }
    }

    pub fn n_states(&self) -> usize {
        self.n_states
    }

    pub fn n_actions(&self) -> usize {
        self.n_actions
    }

    pub fn row(&self, state: usize) -> &[f64] {
        let start = state * self.n_actions;
        &self.values[start..start + self.n_actions]
    }

    fn row_mut(&mut self, state: usize) -> &mut [f64] {
        let start = state * self.n_actions;
        &mut self.values[start..start + self.n_actions]
    }

    pub fn get(&self, state: usize, action: usize) -> f64 {
        self.row(state)[action]
    }

    pub fn set(&mut self, state: usize, action: usize, value: f64) {
        self.row_mut(state)[action] = value;
    }

    /// Largest action value of `state`.
    pub fn max(&self, state: usize) -> f64 {
        self.row(state)
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Action with the largest value; ties go to the lowest index.
    pub fn argmax(&self, state: usize) -> usize {
        greedy(self.row(state))
    }

    /// Writes one line per state, values separated by commas.
    pub fn write_to<W: Write>(&self, mut w: W) -> Result<(), QTableError> {
        for state in 0..self.n_states {
            let line = self
                .row(state)
                .iter()
                .map(|v| format!("{:?}", v))
                .collect::<Vec<_>>()
                .join(",");
            writeln!(w, "{}", line)?;
        }
        w.flush()?;
        Ok(())
    }

    /// Reads rows in order from `r` into the table.
    ///
    /// A line with fewer values than actions leaves the remaining values of
    /// its row as they were. Rows read before an error stay applied. Returns
    /// the number of rows read.
    pub fn read_from<R: BufRead>(&mut self, r: R) -> Result<usize, QTableError> {
        let mut n_rows = 0;
        for (line_ix, line) in r.lines().enumerate() {
            let line = line?;
            if line_ix >= self.n_states {
                return Err(QTableError::TooManyRows(self.n_states));
            }
            let values: Vec<&str> = line.split(',').collect();
            if values.len() > self.n_actions {
                return Err(QTableError::TooManyColumns {
                    line: line_ix + 1,
                    found: values.len(),
                    expected: self.n_actions,
                });
            }
            for (col, value) in values.into_iter().enumerate() {
                let v = value
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| QTableError::ParseFloat {
                        line: line_ix + 1,
                        column: col + 1,
                        value: value.to_string(),
                    })?;
                self.set(line_ix, col, v);
            }
            n_rows += 1;
        }
        Ok(n_rows)
    }

    /// Saves the table to a text file, replacing it.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), QTableError> {
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))
    }

    /// Loads rows from a text file written by [`QTable::save`].
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, QTableError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let n_rows = self.read_from(BufReader::new(file))?;
        info!("Loaded {} rows of the Q-table from {:?}", n_rows, path);
        Ok(n_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmax_prefers_lowest_index() {
        let mut table = QTable::new(2, 4);
        assert_eq!(table.argmax(0), 0);
        table.set(0, 1, 2.0);
        table.set(0, 3, 2.0);
        assert_eq!(table.argmax(0), 1);
        table.set(1, 0, -1.0);
        assert_eq!(table.argmax(1), 1);
        assert_eq!(table.max(1), 0.0);
    }

    #[test]
    fn test_write_format() {
        let mut table = QTable::new(2, 4);
        table.set(0, 0, 1.5);
        table.set(1, 3, -0.25);
        let mut buf = vec![];
        table.write_to(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "1.5,0.0,0.0,0.0\n0.0,0.0,0.0,-0.25\n"
        );
    }

    #[test]
    fn test_read_partial_rows_keep_stale_values() {
        let mut table = QTable::new(3, 4);
        for a in 0..4 {
            table.set(0, a, 9.0);
        }
        let n = table.read_from("1.0,2.0\n0.5,0.5,0.5,0.5\n".as_bytes()).unwrap();
        assert_eq!(n, 2);
        assert_eq!(table.row(0), &[1.0, 2.0, 9.0, 9.0]);
        assert_eq!(table.row(1), &[0.5; 4]);
        assert_eq!(table.row(2), &[0.0; 4]);
    }

    #[test]
    fn test_read_accepts_exponents() {
        let mut table = QTable::new(1, 2);
        table.read_from("1.0E-7,-2e3\n".as_bytes()).unwrap();
        assert_eq!(table.row(0), &[1.0e-7, -2000.0]);
    }

    #[test]
    fn test_read_errors() {
        let mut table = QTable::new(2, 2);
        let err = table.read_from("1.0,2.0\n3.0,x\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            QTableError::ParseFloat {
                line: 2,
                column: 2,
                ..
            }
        ));
        // the first row and the value before the bad one were applied
        assert_eq!(table.row(0), &[1.0, 2.0]);
        assert_eq!(table.get(1, 0), 3.0);

        let mut table = QTable::new(1, 2);
        let err = table.read_from("1,2\n3,4\n".as_bytes()).unwrap_err();
        assert!(matches!(err, QTableError::TooManyRows(1)));

        let mut table = QTable::new(1, 2);
        let err = table.read_from("1,2,3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, QTableError::TooManyColumns { found: 3, .. }));
    }
}
