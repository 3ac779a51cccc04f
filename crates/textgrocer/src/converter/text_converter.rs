//! # Text Record Converter

use std::{fmt, io::BufRead, path::Path};

use crate::{
    converter::{ConverterOptions, DesignMatrix, MatrixBuilder},
    errors::GrocerResult,
    features::{FeatureGenerator, NGram, SparseFeatureMap},
    io::{
        snapshot::{CLASS_MAP_RESOURCE, FEAT_GEN_RESOURCE, TEXT_PREP_RESOURCE},
        text_src::read_text_src,
    },
    segmentation::Tokenize,
    types::{FeatureId, LabelId},
    vocab::{LabelIndex, Vocabulary},
};

/// Record counts of one corpus conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Well-formed ``(label, text)`` records; one matrix row each.
    pub accepted: usize,

    /// Malformed records, skipped without a row or a label.
    pub skipped: usize,
}

/// The result of [`TextConverter::convert_corpus`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedCorpus {
    /// One row per accepted record, in input order; canonical column order.
    pub matrix: DesignMatrix,

    /// The label id of each row.
    pub labels: Vec<LabelId>,

    /// Record counts.
    pub report: ConversionReport,
}

/// Converts labeled text records into sparse unigram+bigram count features.
///
/// Owns the three growing tables:
/// * `text_prep` - the token [`Vocabulary`];
/// * `feat_gen` - the n-gram table, inside the [`FeatureGenerator`];
/// * `class_map` - the [`LabelIndex`].
///
/// Every conversion may grow the tables, including after [`load`](Self::load);
/// callers needing frozen inference ids must not feed unseen text to a
/// loaded converter through [`convert_corpus`](Self::convert_corpus), which
/// renumbers the n-gram table.
pub struct TextConverter {
    options: ConverterOptions,
    tokenizer: Box<dyn Tokenize>,
    text_prep: Vocabulary,
    feat_gen: FeatureGenerator,
    class_map: LabelIndex,
}

impl fmt::Debug for TextConverter {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("TextConverter")
            .field("options", &self.options)
            .field("tokens", &self.text_prep.num_tokens())
            .field("ngrams", &self.feat_gen.num_ngrams())
            .field("classes", &self.class_map.len())
            .finish()
    }
}

impl TextConverter {
    /// Build a converter with default options.
    pub fn new() -> GrocerResult<Self> {
        Self::from_options(ConverterOptions::default())
    }

    /// Build a converter; the default segmenter is compiled from `options`.
    pub fn from_options(options: ConverterOptions) -> GrocerResult<Self> {
        let segmenter = options.build_segmenter()?;
        Ok(Self {
            options,
            tokenizer: Box::new(segmenter),
            text_prep: Vocabulary::default(),
            feat_gen: FeatureGenerator::default(),
            class_map: LabelIndex::default(),
        })
    }

    /// Replace the default segmenter with a caller-supplied tokenizer.
    pub fn with_tokenizer<T>(
        mut self,
        tokenizer: T,
    ) -> Self
    where
        T: Tokenize + 'static,
    {
        self.tokenizer = Box::new(tokenizer);
        self
    }

    /// The converter options.
    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    /// The token vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.text_prep
    }

    /// The feature generator.
    pub fn feature_generator(&self) -> &FeatureGenerator {
        &self.feat_gen
    }

    /// The class label index.
    pub fn label_index(&self) -> &LabelIndex {
        &self.class_map
    }

    /// Return the id of `label`, allocating the next id on first sight.
    pub fn get_class_id(
        &mut self,
        label: &str,
    ) -> LabelId {
        self.class_map.to_id(label)
    }

    /// Return the label for `id`; see [`LabelIndex::to_name`].
    pub fn get_class_name(
        &self,
        id: i64,
    ) -> GrocerResult<&str> {
        self.class_map.to_name(id)
    }

    /// Return the n-gram key of feature (column) `id`.
    pub fn feature_key(
        &self,
        id: FeatureId,
    ) -> Option<NGram> {
        self.feat_gen.ngram(id)
    }

    /// Split `text` into tokens with the configured tokenizer.
    pub fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        if self.options.lowercase {
            self.tokenizer.tokenize(&text.to_lowercase())
        } else {
            self.tokenizer.tokenize(text)
        }
    }

    /// Compute the bigram features of `text`, growing the tables as needed.
    pub fn text_to_features(
        &mut self,
        text: &str,
    ) -> SparseFeatureMap {
        let tokens = self.tokenize(text);
        let token_ids = self.text_prep.encode(&tokens);
        self.feat_gen.bigram(&token_ids)
    }

    /// Compute the bigram features of `text`; and the id of `label`, if given.
    pub fn record_to_features(
        &mut self,
        text: &str,
        label: Option<&str>,
    ) -> (SparseFeatureMap, Option<LabelId>) {
        let feat = self.text_to_features(text);
        let label_id = label.map(|label| self.class_map.to_id(label));
        (feat, label_id)
    }

    /// Convert a corpus of records into a [`DesignMatrix`] and label ids.
    ///
    /// A record is a list of fields; exactly 2 fields is ``(label, text)``,
    /// any other arity is malformed and skipped.
    ///
    /// After assembly, the n-gram table is renumbered into [`NGram`] key
    /// order, and the matrix columns are permuted to match; so the column
    /// layout does not depend on first-occurrence order, and later
    /// conversions use the renumbered ids.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, records)))]
    pub fn convert_corpus<I, R, S>(
        &mut self,
        records: I,
    ) -> ConvertedCorpus
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut builder = MatrixBuilder::default();
        let mut labels: Vec<LabelId> = Vec::new();
        let mut report = ConversionReport::default();

        for (idx, record) in records.into_iter().enumerate() {
            let [label, text] = record.as_ref() else {
                log::trace!(
                    "skipping record {idx}: expected 2 fields, found {}",
                    record.as_ref().len()
                );
                report.skipped += 1;
                continue;
            };

            let feat = self.text_to_features(text.as_ref());
            labels.push(self.class_map.to_id(label.as_ref()));
            builder.push_row(&feat);
            report.accepted += 1;
        }

        let matrix = builder.finish(self.feat_gen.len());
        let old_to_new = self.feat_gen.sort_features();
        let matrix = matrix.permute_columns(&old_to_new);

        if report.skipped > 0 {
            log::debug!("skipped {} malformed record(s)", report.skipped);
        }
        log::info!(
            "converted {} record(s): {} columns, {} entries, {} classes",
            report.accepted,
            matrix.cols(),
            matrix.nnz(),
            self.class_map.len()
        );

        ConvertedCorpus {
            matrix,
            labels,
            report,
        }
    }

    /// Read delimited ``label<delimiter>text`` lines and convert them.
    ///
    /// See [`read_text_src`] and [`convert_corpus`](Self::convert_corpus).
    pub fn convert_text<R: BufRead>(
        &mut self,
        reader: R,
        delimiter: &str,
    ) -> GrocerResult<ConvertedCorpus> {
        let records = read_text_src(reader, delimiter)?;
        Ok(self.convert_corpus(&records))
    }

    /// Save the three tables as named resources under `dir`.
    ///
    /// `dir` is created if needed.
    pub fn save<P: AsRef<Path>>(
        &self,
        dir: P,
    ) -> GrocerResult<()> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        self.text_prep.save_path(dir.join(TEXT_PREP_RESOURCE))?;
        self.feat_gen.save_path(dir.join(FEAT_GEN_RESOURCE))?;
        self.class_map.save_path(dir.join(CLASS_MAP_RESOURCE))?;

        log::debug!("saved converter to {}", dir.display());
        Ok(())
    }

    /// Replace the three tables with the ones saved under `dir`.
    ///
    /// On error, the current tables are left untouched.
    pub fn load<P: AsRef<Path>>(
        &mut self,
        dir: P,
    ) -> GrocerResult<()> {
        let dir = dir.as_ref();

        let mut text_prep = Vocabulary::default();
        text_prep.load_path(dir.join(TEXT_PREP_RESOURCE))?;
        let mut feat_gen = FeatureGenerator::default();
        feat_gen.load_path(dir.join(FEAT_GEN_RESOURCE))?;
        let mut class_map = LabelIndex::default();
        class_map.load_path(dir.join(CLASS_MAP_RESOURCE))?;

        self.text_prep = text_prep;
        self.feat_gen = feat_gen;
        self.class_map = class_map;

        log::debug!("loaded converter from {}", dir.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GrocerError, vocab::NOT_IN_TRAINING};

    fn sorted(feat: SparseFeatureMap) -> Vec<(FeatureId, u32)> {
        let mut items: Vec<_> = feat.into_iter().collect();
        items.sort();
        items
    }

    #[test]
    fn test_record_to_features() {
        let mut conv = TextConverter::new().unwrap();

        let (feat, label) = conv.record_to_features("good good", Some("pos"));
        assert_eq!(label, Some(0));
        assert_eq!(sorted(feat), vec![(1, 2), (2, 1)]);

        let (feat, label) = conv.record_to_features("good", None);
        assert_eq!(label, None);
        assert_eq!(sorted(feat), vec![(1, 1)]);

        assert_eq!(conv.vocabulary().get("good"), Some(1));
        assert_eq!(conv.feature_key(2), Some(NGram::bigram(1, 1)));
        assert_eq!(conv.label_index().len(), 1);
    }

    #[test]
    fn test_concrete_scenario() {
        let mut conv = TextConverter::new().unwrap();
        let records = vec![vec!["pos", "good good"], vec!["bad-row"], vec!["neg", "bad"]];

        let corpus = conv.convert_corpus(&records);

        assert_eq!(corpus.report, ConversionReport { accepted: 2, skipped: 1 });
        assert_eq!(corpus.labels, vec![0, 1]);
        assert_eq!(corpus.matrix.shape(), (2, 4));

        let good = conv
            .feature_generator()
            .get(&NGram::unigram(conv.vocabulary().get("good").unwrap()))
            .unwrap();
        assert_eq!(corpus.matrix.get(0, good as usize), 2);
        assert_eq!(corpus.matrix.row(0), vec![(1, 2), (2, 1)]);
        assert_eq!(corpus.matrix.row(1), vec![(3, 1)]);

        assert_eq!(conv.get_class_name(0).unwrap(), "pos");
        assert_eq!(conv.get_class_name(1).unwrap(), "neg");
        assert_eq!(conv.get_class_name(-1).unwrap(), NOT_IN_TRAINING);
        assert!(matches!(
            conv.get_class_name(2),
            Err(GrocerError::UnknownClassId { id: 2, num_classes: 2 })
        ));
    }

    #[test]
    fn test_canonical_column_order() {
        let mut conv = TextConverter::new().unwrap();
        let records = [["a", "x y"], ["b", "y x"]];

        // First-occurrence ids: (x,)=1 (y,)=2 (x,y)=3 (y,x)=4;
        // sorted:               (x,)=1 (x,y)=2 (y,)=3 (y,x)=4.
        let corpus = conv.convert_corpus(&records);
        assert_eq!(corpus.matrix.row(0), vec![(1, 1), (2, 1), (3, 1)]);
        assert_eq!(corpus.matrix.row(1), vec![(1, 1), (3, 1), (4, 1)]);

        assert_eq!(sorted(conv.text_to_features("x y")), vec![(1, 1), (2, 1), (3, 1)]);
        assert_eq!(conv.feature_key(2), Some(NGram::bigram(1, 2)));
        assert_eq!(conv.feature_key(3), Some(NGram::unigram(2)));
    }

    #[test]
    fn test_reproducible() {
        let records = vec![
            vec!["sports", "the team won the final"],
            vec!["finance", "the market fell"],
            vec!["sports", "the final whistle"],
            vec![],
            vec!["finance", "market rally, team bonus"],
        ];

        let a = TextConverter::new().unwrap().convert_corpus(&records);
        let b = TextConverter::new().unwrap().convert_corpus(&records);
        assert_eq!(a, b);
        assert_eq!(a.report.skipped, 1);
        assert_eq!(a.labels, vec![0, 1, 0, 1]);
    }

    #[test]
    fn test_empty_corpus() {
        let mut conv = TextConverter::new().unwrap();
        let corpus = conv.convert_corpus(Vec::<Vec<String>>::new());
        assert_eq!(corpus.matrix.shape(), (0, 1));
        assert!(corpus.labels.is_empty());
    }

    #[test]
    fn test_custom_tokenizer() {
        let mut conv = TextConverter::new()
            .unwrap()
            .with_tokenizer(|text: &str| text.split('|').map(str::to_string).collect::<Vec<_>>());

        let corpus = conv.convert_corpus([["l", "a b|a b"]]);
        assert_eq!(conv.vocabulary().get("a b"), Some(1));
        assert_eq!(corpus.matrix.row(0), vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn test_lowercase() {
        let options = ConverterOptions::default().with_lowercase(true);
        let mut conv = TextConverter::from_options(options).unwrap();

        conv.text_to_features("Good GOOD good");
        assert_eq!(conv.vocabulary().num_tokens(), 1);
        assert_eq!(conv.tokenize("HeLLo"), vec!["hello"]);
    }

    #[test]
    fn test_convert_text() {
        let mut conv = TextConverter::new().unwrap();
        let text = "pos\tgood good\nbad-row\nneg\tbad\ttoo many\nneg\tbad\n";

        let corpus = conv.convert_text(text.as_bytes(), "\t").unwrap();
        assert_eq!(corpus.report, ConversionReport { accepted: 2, skipped: 2 });
        assert_eq!(corpus.labels, vec![0, 1]);
    }

    #[test]
    fn test_save_load() {
        let dir = tempdir::TempDir::new("converter_test").unwrap();
        let model_dir = dir.path().join("model");

        let mut conv = TextConverter::new().unwrap();
        conv.convert_corpus([["pos", "good movie"], ["neg", "bad movie"]]);
        conv.save(&model_dir).unwrap();

        let mut loaded = TextConverter::new().unwrap();
        loaded.text_to_features("stale state");
        loaded.load(&model_dir).unwrap();

        assert_eq!(loaded.vocabulary(), conv.vocabulary());
        assert_eq!(loaded.feature_generator(), conv.feature_generator());
        assert_eq!(loaded.label_index(), conv.label_index());
        assert_eq!(
            sorted(loaded.text_to_features("bad movie")),
            sorted(conv.text_to_features("bad movie"))
        );
    }

    #[test]
    fn test_load_missing_keeps_state() {
        let dir = tempdir::TempDir::new("converter_test").unwrap();

        let mut conv = TextConverter::new().unwrap();
        conv.get_class_id("kept");

        let res = conv.load(dir.path());
        assert!(matches!(res, Err(GrocerError::MissingResource { .. })));
        assert_eq!(conv.get_class_name(0).unwrap(), "kept");
    }
}
