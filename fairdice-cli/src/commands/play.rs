use comfy_table::{presets::UTF8_FULL, Table};
use fairdice_core::{
    CommitmentScheme, DiceSet, FairDiceError, FairRound, FairnessEngine, GameConfig, HmacSha3,
    OsRandom, ProbabilityMatrix, RandomSource, Result,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Roll(usize),
    Help,
    Exit,
}

fn parse_choice(input: &str, dice_count: usize) -> Result<MenuChoice> {
    let choice = input.trim();

    if choice.eq_ignore_ascii_case("e") {
        return Ok(MenuChoice::Exit);
    }
    if choice.eq_ignore_ascii_case("h") {
        return Ok(MenuChoice::Help);
    }

    match choice.parse::<usize>() {
        Ok(n) if (1..=dice_count).contains(&n) => Ok(MenuChoice::Roll(n - 1)),
        Ok(n) => Err(FairDiceError::menu_input(format!(
            "there is no die {}, choose 1 to {}",
            n, dice_count
        ))),
        Err(_) => Err(FairDiceError::menu_input(format!(
            "'{}' is not a menu option",
            choice
        ))),
    }
}

/// Probability table shown for `H`
fn render_help(dice: &DiceSet) -> String {
    let matrix = ProbabilityMatrix::build(dice.as_slice());

    let mut legend = String::new();
    for (i, die) in dice.iter().enumerate() {
        legend.push_str(&format!("  {}: {}\n", i + 1, die));
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let mut header = vec!["Die".to_string()];
    header.extend((1..=matrix.size()).map(|j| j.to_string()));
    table.set_header(header);

    for (i, row) in matrix.rows().iter().enumerate() {
        let mut cells = vec![(i + 1).to_string()];
        cells.extend(row.iter().map(|p| format!("{:.2}", p)));
        table.add_row(cells);
    }

    format!(
        "\nHelp:\n{}Probability that the row die beats the column die:\n{}\n",
        legend, table
    )
}

/// Next input line without its terminator. Bytes that are not UTF-8 are
/// replaced so they fail validation like any other bad input.
async fn read_line<I: AsyncBufRead + Unpin>(input: &mut I) -> Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf).await? == 0 {
        return Ok(None);
    }

    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string()))
}

async fn emit<O: AsyncWrite + Unpin>(output: &mut O, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}

/// Interactive menu loop over any line source
pub struct Session<R = OsRandom, C = HmacSha3> {
    dice: DiceSet,
    engine: FairnessEngine<R, C>,
    roll_range: u32,
}

impl<R: RandomSource, C: CommitmentScheme> Session<R, C> {
    pub fn new(dice: DiceSet, engine: FairnessEngine<R, C>, config: &GameConfig) -> Self {
        Self {
            dice,
            engine,
            roll_range: config.roll_range,
        }
    }

    pub async fn run<I, O>(&mut self, mut input: I, output: &mut O) -> Result<()>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
    {
        emit(output, "Welcome to the Generalized Dice Game!\n").await?;

        loop {
            emit(output, &self.menu()).await?;
            emit(output, "Select an option: ").await?;

            let Some(line) = read_line(&mut input).await? else {
                emit(output, "\n").await?;
                break;
            };

            match parse_choice(&line, self.dice.len()) {
                Ok(MenuChoice::Exit) => break,
                Ok(MenuChoice::Help) => emit(output, &render_help(&self.dice)).await?,
                Ok(MenuChoice::Roll(index)) => self.play_round(index, &mut input, output).await?,
                Err(e) => {
                    tracing::debug!("Rejected menu input {:?}", line);
                    emit(output, &format!("Error: {}. Try again.\n", e)).await?;
                }
            }
        }

        emit(output, "Thanks for playing!\n").await?;
        Ok(())
    }

    fn menu(&self) -> String {
        let mut menu = String::from("\nMenu:\n");
        for (i, die) in self.dice.iter().enumerate() {
            menu.push_str(&format!("{}: Dice {}\n", i + 1, die));
        }
        menu.push_str("H: Help\n");
        menu.push_str("E: Exit\n");
        menu
    }

    async fn play_round<I, O>(
        &mut self,
        index: usize,
        input: &mut I,
        output: &mut O,
    ) -> Result<()>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
    {
        let die = self
            .dice
            .get(index)
            .ok_or_else(|| FairDiceError::menu_input(format!("there is no die {}", index + 1)))?;
        emit(output, &format!("You selected die: {}\n", die)).await?;

        let committed = self.engine.commit(self.roll_range)?;
        emit(output, &format!("HMAC: {}\n", committed.digest())).await?;
        emit(
            output,
            &format!("Enter your number (0 to {}): ", committed.max() - 1),
        )
        .await?;

        let Some(line) = read_line(input).await? else {
            emit(output, "\n").await?;
            return Ok(());
        };

        match committed.reveal(&line) {
            Ok(round) => {
                let face = die.face(round.result() as usize);
                emit(output, &describe_round(&round, face)).await?;
            }
            Err(e) if e.is_validation() => {
                emit(output, &format!("Error: {}\n", e)).await?;
            }
            Err(e) => return Err(e),
        }

        Ok(())
    }
}

fn describe_round(round: &FairRound, face: i64) -> String {
    format!(
        "Your number: {}, Computer number: {}\nKey used: {}\nResult: {}\nRolled face: {}\n",
        round.user_number(),
        round.computer_number(),
        round.secret_key_hex(),
        round.result(),
        face
    )
}

/// Play on the terminal until the user exits
pub async fn play(dice: DiceSet, config: &GameConfig) -> Result<()> {
    let engine = FairnessEngine::new(config)?;
    let mut session = Session::new(dice, engine, config);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    tracing::info!("Starting session with {} dice", session.dice.len());
    session.run(stdin, &mut stdout).await
}
